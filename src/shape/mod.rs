//! Mesh buffers consumed and produced by the shattering pipeline.

pub use self::mesh_buffers::{MeshBuffers, MeshBuffersError};

mod mesh_buffers;
