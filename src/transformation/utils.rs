//! Low-level utilities for procedural mesh generation.
//!
//! These are the building blocks of the meshes of [`crate::transformation`]. They are
//! exposed for users who want to generate their own test meshes.

use crate::math::{Point, Real, TexCoord, Vector};
use na::ComplexField;

/// Returns the scaled version of a vector of points.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use shatter3d::transformation::utils::scaled;
/// use shatter3d::math::{Point, Vector};
///
/// let points = vec![Point::new(1.0, 2.0, 3.0), Point::new(4.0, 5.0, 6.0)];
/// let result = scaled(points, Vector::new(2.0, 3.0, 0.5));
///
/// assert_eq!(result[0], Point::new(2.0, 6.0, 1.5));
/// assert_eq!(result[1], Point::new(8.0, 15.0, 3.0));
/// # }
/// ```
pub fn scaled(mut points: Vec<Point<Real>>, scale: Vector<Real>) -> Vec<Point<Real>> {
    points
        .iter_mut()
        .for_each(|p| p.coords.component_mul_assign(&scale));
    points
}

/// Pushes a discretized counterclockwise circle of the plane `y = y` to a buffer.
///
/// The first point is at `(radius, y, 0)`, then each point is rotated by `dtheta` from the
/// previous one.
#[inline]
pub fn push_circle(radius: Real, nsubdiv: u32, dtheta: Real, y: Real, out: &mut Vec<Point<Real>>) {
    let mut curr_theta: Real = 0.0;

    for _ in 0..nsubdiv {
        out.push(Point::new(
            ComplexField::cos(curr_theta) * radius,
            y,
            ComplexField::sin(curr_theta) * radius,
        ));
        curr_theta += dtheta;
    }
}

/// Pushes the texture coordinates of a circle pushed by [`push_circle`].
///
/// The `u` coordinate goes from 0 to 1 along the circle, and `v` is constant.
#[inline]
pub fn push_circle_texcoords(nsubdiv: u32, v: Real, out: &mut Vec<TexCoord<Real>>) {
    let du = if nsubdiv > 1 {
        1.0 / (nsubdiv - 1) as Real
    } else {
        0.0
    };

    for i in 0..nsubdiv {
        out.push(TexCoord::new(i as Real * du, v));
    }
}

/// Creates the faces between two consecutive circles, without closing the ring.
///
/// The connection between the last point and the first point of each circle is not made.
/// Combined with a duplicated seam vertex, this lets texture coordinates wrap around.
///
/// # Panics
/// Panics if `nsubdiv` is 0.
#[inline]
pub fn push_open_ring_indices(
    base_lower_circle: u32,
    base_upper_circle: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; 3]>,
) {
    assert!(nsubdiv > 0);

    for i in 0..nsubdiv - 1 {
        let bli = base_lower_circle + i;
        let bui = base_upper_circle + i;
        push_rectangle_indices(bui + 1, bui, bli + 1, bli, out);
    }
}

/// Creates the faces between a circle and a point shared by all of them, without closing
/// the fan.
///
/// With `reversed` set, the faces look the other way, which is needed for the cap at the
/// bottom of a shape.
#[inline]
pub fn push_open_fan_indices(
    base_circle: u32,
    point: u32,
    nsubdiv: u32,
    reversed: bool,
    out: &mut Vec<[u32; 3]>,
) {
    for i in 0..nsubdiv.saturating_sub(1) {
        let (a, b) = (base_circle + i, base_circle + i + 1);

        if reversed {
            out.push([point, a, b]);
        } else {
            out.push([point, b, a]);
        }
    }
}

/// Pushes two triangles forming a rectangle to the index buffer.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use shatter3d::transformation::utils::push_rectangle_indices;
///
/// let mut indices = Vec::new();
///
/// // 0 --- 1
/// // |     |
/// // 2 --- 3
/// push_rectangle_indices(0, 1, 2, 3, &mut indices);
///
/// assert_eq!(indices, vec![[0, 2, 3], [3, 1, 0]]);
/// # }
/// ```
#[inline]
pub fn push_rectangle_indices(ul: u32, ur: u32, dl: u32, dr: u32, out: &mut Vec<[u32; 3]>) {
    out.push([ul, dl, dr]);
    out.push([dr, ur, ul]);
}
