use crate::math::*;

/// Computes the normal of a counter-clock-wise triangle.
///
/// Returns `None` if the triangle is degenerate.
#[inline]
pub fn ccw_face_normal(pts: [&Point<Real>; 3]) -> Option<UnitVector<Real>> {
    UnitVector::try_new(scaled_face_normal(pts), DEFAULT_EPSILON)
}

/// Computes the non-normalized normal of a counter-clock-wise triangle.
///
/// Its norm is twice the area of the triangle, so summing these vectors around a
/// vertex weights every adjacent face by its area.
#[inline]
pub fn scaled_face_normal(pts: [&Point<Real>; 3]) -> Vector<Real> {
    let ab = *pts[1] - *pts[0];
    let ac = *pts[2] - *pts[0];
    ab.cross(&ac)
}
