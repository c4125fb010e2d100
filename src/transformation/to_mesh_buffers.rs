use crate::math::{Point, Real, TexCoord, Vector};
use crate::shape::MeshBuffers;
use crate::transformation::utils;
use na::{ComplexField, RealField};

/// Discretizes the boundary of a box centered at the origin.
///
/// The resulting mesh has 8 vertices, 12 triangles facing outward, and neither normals nor
/// texture coordinates.
pub fn cuboid(half_extents: Vector<Real>) -> MeshBuffers {
    let (vtx, idx) = unit_cuboid();
    MeshBuffers::from_parts(utils::scaled(vtx, half_extents * 2.0), None, None, idx)
}

/// Discretizes a sphere of radius `radius` centered at the origin.
///
/// The sphere is made of `nphi - 1` rings of `ntheta + 1` vertices (the first and last vertex
/// of each ring coincide so texture coordinates can wrap), closed by a vertex at each pole.
/// The south pole is the first vertex and the north pole the last one. Texture coordinates
/// map longitude to `u` and latitude to `v`.
///
/// # Panics
/// Panics if `ntheta < 3` or `nphi < 2`.
pub fn uv_sphere(radius: Real, ntheta: u32, nphi: u32) -> MeshBuffers {
    assert!(ntheta >= 3, "A sphere needs at least 3 subdivisions around its axis.");
    assert!(nphi >= 2, "A sphere needs at least 2 subdivisions from pole to pole.");

    let dtheta = Real::two_pi() / ntheta as Real;
    let dphi = Real::pi() / nphi as Real;
    let ring_len = ntheta + 1;

    let mut coords = vec![Point::new(0.0, -radius, 0.0)];
    let mut texcoords = vec![TexCoord::new(0.5, 0.0)];

    for i in 1..nphi {
        let phi = -Real::frac_pi_2() + i as Real * dphi;
        utils::push_circle(
            ComplexField::cos(phi) * radius,
            ring_len,
            dtheta,
            ComplexField::sin(phi) * radius,
            &mut coords,
        );
        utils::push_circle_texcoords(ring_len, i as Real / nphi as Real, &mut texcoords);
    }

    coords.push(Point::new(0.0, radius, 0.0));
    texcoords.push(TexCoord::new(0.5, 1.0));

    let south = 0;
    let north = coords.len() as u32 - 1;
    let mut idx = vec![];

    utils::push_open_fan_indices(1, south, ring_len, true, &mut idx);
    for i in 0..nphi - 2 {
        let bottom = 1 + i * ring_len;
        utils::push_open_ring_indices(bottom, bottom + ring_len, ring_len, &mut idx);
    }
    utils::push_open_fan_indices(north - ring_len, north, ring_len, false, &mut idx);

    MeshBuffers::from_parts(coords, None, Some(texcoords), idx)
}

/// The cube `[-0.5, 0.5]³`.
fn unit_cuboid() -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let coords = vec![
        Point::new(-0.5, -0.5, 0.5),
        Point::new(-0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, 0.5),
        Point::new(-0.5, 0.5, 0.5),
        Point::new(-0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, 0.5),
    ];

    let faces = vec![
        [4, 5, 0],
        [5, 1, 0],
        [5, 6, 1],
        [6, 2, 1],
        [6, 7, 3],
        [2, 6, 3],
        [7, 4, 0],
        [3, 7, 0],
        [0, 1, 2],
        [3, 0, 2],
        [7, 6, 5],
        [4, 7, 5],
    ];

    (coords, faces)
}
