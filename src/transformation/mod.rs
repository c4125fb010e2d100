//! Procedural generation of meshes to shatter.
//!
//! # Example
//!
//! ```
//! # #[cfg(all(feature = "dim3", feature = "f32"))]
//! # {
//! use shatter3d::math::Vector;
//! use shatter3d::transformation::{cuboid, uv_sphere};
//!
//! let boxed = cuboid(Vector::new(1.0, 2.0, 3.0));
//! assert_eq!(boxed.num_triangles(), 12);
//!
//! let sphere = uv_sphere(1.0, 16, 8);
//! assert!(sphere.texcoords().is_some());
//! # }
//! ```

pub use self::to_mesh_buffers::{cuboid, uv_sphere};

mod to_mesh_buffers;
pub mod utils;
