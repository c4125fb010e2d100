use crate::math::{Real, Vector, DEFAULT_EPSILON};

/// Normalizes `v`, or returns the zero vector if its norm is too small to be normalized.
#[inline]
pub fn normalize_or_zero(v: &Vector<Real>) -> Vector<Real> {
    v.try_normalize(DEFAULT_EPSILON).unwrap_or_else(Vector::zeros)
}
