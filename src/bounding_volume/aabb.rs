//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};
use na;
use num::Bounded;

/// An Axis-Aligned Bounding Box (AABB).
///
/// Defined by its minimum and maximum corners, with `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y`
/// and `mins.z ≤ maxs.z` for any valid box. It is used to measure meshes and to bound
/// seed placement.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use shatter3d::bounding_volume::Aabb;
/// use shatter3d::math::Point;
///
/// let aabb = Aabb::new(Point::new(-0.5, -0.5, -0.5), Point::new(0.5, 0.5, 0.5));
///
/// assert!(aabb.contains_local_point(&Point::origin()));
/// assert_eq!(aabb.center(), Point::origin());
/// assert_eq!(aabb.extents().x, 1.0);
/// assert_eq!(aabb.half_extents().x, 0.5);
/// # }
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid `Aabb` with `mins` components set to `Real::max_values` and `maxs`components set to `-Real::max_values`.
    ///
    /// This is often used as the initial values of some `Aabb` merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::max_value()).into(),
            Vector::repeat(-Real::max_value()).into(),
        )
    }

    /// Creates a new `Aabb` from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new `Aabb` tightly enclosing the given points.
    ///
    /// Returns an invalid `Aabb` (see [`Aabb::new_invalid`]) if `pts` is empty.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut result = Self::new_invalid();

        for pt in pts {
            result.take_point(*pt);
        }

        result
    }

    /// Checks that this `Aabb` has `mins` smaller or equal to `maxs` on every axis.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.mins.x <= self.maxs.x && self.mins.y <= self.maxs.y && self.mins.z <= self.maxs.z
    }

    /// The center of this `Aabb`.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this `Aabb`.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        let half: Real = na::convert::<f64, Real>(0.5);
        (self.maxs - self.mins) * half
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Does this `Aabb` contains a point expressed in the same coordinate frame as `self`?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..3 {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod test {
    use super::Aabb;
    use crate::math::{Point, Vector};

    #[test]
    fn aabb_from_points() {
        let pts = [
            Point::new(1.0, -2.0, 0.5),
            Point::new(-1.0, 3.0, 0.0),
            Point::new(0.0, 0.0, 2.0),
        ];
        let aabb = Aabb::from_points(&pts);

        assert_eq!(aabb.mins, Point::new(-1.0, -2.0, 0.0));
        assert_eq!(aabb.maxs, Point::new(1.0, 3.0, 2.0));
        assert!(pts.iter().all(|pt| aabb.contains_local_point(pt)));
        assert!(!aabb.contains_local_point(&Point::new(0.0, 0.0, 2.5)));
    }

    #[test]
    fn empty_point_set_is_invalid() {
        let aabb = Aabb::from_points(&[]);
        assert!(!aabb.is_valid());
    }

    #[test]
    fn half_extents_round_trip() {
        let aabb = Aabb::from_half_extents(Point::new(1.0, 1.0, 1.0), Vector::new(1.0, 2.0, 3.0));
        assert_eq!(aabb.half_extents(), Vector::new(1.0, 2.0, 3.0));
        assert_eq!(aabb.center(), Point::new(1.0, 1.0, 1.0));
    }
}
