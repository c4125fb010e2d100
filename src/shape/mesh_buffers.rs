use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, TexCoord, Vector};
use crate::utils::{normalize_or_zero, scaled_face_normal};

/// Indicated an inconsistency while building mesh buffers.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshBuffersError {
    /// Mesh buffers must contain at least one triangle.
    #[error("mesh buffers must contain at least one triangle.")]
    EmptyIndices,
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {index} but there are only {num_vertices} vertices.")]
    IndexOutOfBounds {
        /// The offending triangle.
        triangle: usize,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
    /// The normal buffer does not have one normal per vertex.
    #[error("expected {expected} normals, found {found}.")]
    NormalCountMismatch {
        /// The number of vertices.
        expected: usize,
        /// The number of normals provided.
        found: usize,
    },
    /// The texture coordinates buffer does not have one entry per vertex.
    #[error("expected {expected} texture coordinates, found {found}.")]
    TexCoordCountMismatch {
        /// The number of vertices.
        expected: usize,
        /// The number of texture coordinates provided.
        found: usize,
    },
    /// A flat buffer length is not a multiple of its record size.
    #[error("the flat {buffer} buffer has {len} elements, which is not a multiple of {stride}.")]
    FlatBufferLength {
        /// The name of the buffer.
        buffer: &'static str,
        /// The length of the flat buffer.
        len: usize,
        /// The number of scalars per record.
        stride: usize,
    },
}

/// The vertex and index buffers of a triangle mesh about to be shattered.
///
/// Vertex buffers only ever grow by appending, so indices handed out earlier stay valid
/// while boundary vertices are inserted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MeshBuffers {
    positions: Vec<Point<Real>>,
    normals: Option<Vec<Vector<Real>>>,
    texcoords: Option<Vec<TexCoord<Real>>>,
    indices: Vec<[u32; 3]>,
}

impl MeshBuffers {
    /// Creates mesh buffers from positions and triangles, without normals nor texture coordinates.
    pub fn new(
        positions: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, MeshBuffersError> {
        if indices.is_empty() {
            return Err(MeshBuffersError::EmptyIndices);
        }

        let num_vertices = positions.len();
        for (triangle, idx) in indices.iter().enumerate() {
            if let Some(index) = idx.iter().copied().find(|i| *i as usize >= num_vertices) {
                return Err(MeshBuffersError::IndexOutOfBounds {
                    triangle,
                    index,
                    num_vertices,
                });
            }
        }

        Ok(Self {
            positions,
            normals: None,
            texcoords: None,
            indices,
        })
    }

    /// Attaches one normal per vertex to these buffers.
    pub fn with_normals(mut self, normals: Vec<Vector<Real>>) -> Result<Self, MeshBuffersError> {
        if normals.len() != self.positions.len() {
            return Err(MeshBuffersError::NormalCountMismatch {
                expected: self.positions.len(),
                found: normals.len(),
            });
        }

        self.normals = Some(normals);
        Ok(self)
    }

    /// Attaches one texture coordinate per vertex to these buffers.
    pub fn with_texcoords(
        mut self,
        texcoords: Vec<TexCoord<Real>>,
    ) -> Result<Self, MeshBuffersError> {
        if texcoords.len() != self.positions.len() {
            return Err(MeshBuffersError::TexCoordCountMismatch {
                expected: self.positions.len(),
                found: texcoords.len(),
            });
        }

        self.texcoords = Some(texcoords);
        Ok(self)
    }

    /// Assembles mesh buffers from parts known to be consistent.
    pub(crate) fn from_parts(
        positions: Vec<Point<Real>>,
        normals: Option<Vec<Vector<Real>>>,
        texcoords: Option<Vec<TexCoord<Real>>>,
        indices: Vec<[u32; 3]>,
    ) -> Self {
        debug_assert!(normals.as_ref().map_or(true, |n| n.len() == positions.len()));
        debug_assert!(texcoords.as_ref().map_or(true, |t| t.len() == positions.len()));

        Self {
            positions,
            normals,
            texcoords,
            indices,
        }
    }

    /// Builds mesh buffers from the flat layouts produced by mesh loaders.
    ///
    /// `positions` and `normals` hold 3 scalars per vertex, `texcoords` holds 2 scalars per
    /// vertex and `indices` holds 3 indices per triangle. An empty `normals` or `texcoords`
    /// slice means that buffer is absent.
    pub fn from_flat(
        positions: &[Real],
        normals: &[Real],
        texcoords: &[Real],
        indices: &[u32],
    ) -> Result<Self, MeshBuffersError> {
        check_stride("position", positions, 3)?;
        check_stride("normal", normals, 3)?;
        check_stride("texture coordinate", texcoords, 2)?;
        check_stride("index", indices, 3)?;

        let positions = positions
            .chunks_exact(3)
            .map(|p| Point::new(p[0], p[1], p[2]))
            .collect();
        let indices = indices.chunks_exact(3).map(|i| [i[0], i[1], i[2]]).collect();
        let mut result = Self::new(positions, indices)?;

        if !normals.is_empty() {
            let normals = normals
                .chunks_exact(3)
                .map(|n| Vector::new(n[0], n[1], n[2]))
                .collect();
            result = result.with_normals(normals)?;
        }

        if !texcoords.is_empty() {
            let texcoords = texcoords
                .chunks_exact(2)
                .map(|t| TexCoord::new(t[0], t[1]))
                .collect();
            result = result.with_texcoords(texcoords)?;
        }

        Ok(result)
    }

    /// A flat square of side 2 lying on the `y = 0` plane, made of two triangles.
    pub fn flat_quad() -> Self {
        let positions = vec![
            Point::new(-1.0, 0.0, -1.0),
            Point::new(-1.0, 0.0, 1.0),
            Point::new(1.0, 0.0, 1.0),
            Point::new(1.0, 0.0, -1.0),
        ];
        let texcoords = vec![
            TexCoord::new(0.0, 0.0),
            TexCoord::new(0.0, 1.0),
            TexCoord::new(1.0, 1.0),
            TexCoord::new(1.0, 0.0),
        ];

        Self::from_parts(positions, None, Some(texcoords), vec![[0, 1, 2], [0, 2, 3]])
    }

    /// The vertex positions.
    #[inline]
    pub fn positions(&self) -> &[Point<Real>] {
        &self.positions
    }

    /// The vertex normals, if they were provided or generated.
    #[inline]
    pub fn normals(&self) -> Option<&[Vector<Real>]> {
        self.normals.as_deref()
    }

    /// The vertex texture coordinates, if any.
    #[inline]
    pub fn texcoords(&self) -> Option<&[TexCoord<Real>]> {
        self.texcoords.as_deref()
    }

    /// The triangles of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// The number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// The position of the `i`-th vertex.
    #[inline]
    pub fn position(&self, i: u32) -> &Point<Real> {
        &self.positions[i as usize]
    }

    /// The normal of the `i`-th vertex, or zero if this mesh has no normals.
    #[inline]
    pub fn normal(&self, i: u32) -> Vector<Real> {
        self.normals
            .as_ref()
            .map(|normals| normals[i as usize])
            .unwrap_or_else(Vector::zeros)
    }

    /// Replaces the normals by smooth vertex normals computed from the triangles.
    ///
    /// Each triangle adds its non-normalized face normal to its three vertices, then every
    /// vertex normal is normalized. Vertices not referenced by any non-degenerate triangle
    /// get a zero normal.
    pub fn generate_normals(&mut self) {
        let mut normals = vec![Vector::zeros(); self.positions.len()];

        for idx in &self.indices {
            let n = scaled_face_normal([
                &self.positions[idx[0] as usize],
                &self.positions[idx[1] as usize],
                &self.positions[idx[2] as usize],
            ]);

            for i in idx {
                normals[*i as usize] += n;
            }
        }

        normals
            .iter_mut()
            .for_each(|n| *n = normalize_or_zero(n));
        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box of all the vertices.
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(&self.positions)
    }

    /// Moves and scales the vertices: each coordinate becomes `(p - shift) * scale`.
    pub fn rescale(&mut self, shift: Vector<Real>, scale: Vector<Real>) {
        for p in &mut self.positions {
            p.coords = (p.coords - shift).component_mul(&scale);
        }
    }

    /// Appends a vertex interpolated between the vertices `a` (at `t = 0`) and `b` (at `t = 1`).
    ///
    /// `t` is not clamped. Normals are interpolated then renormalized; texture coordinates are
    /// interpolated with the same parameter. Returns the index of the new vertex.
    pub(crate) fn push_interpolated_vertex(&mut self, a: u32, b: u32, t: Real) -> u32 {
        let (a, b) = (a as usize, b as usize);
        let position = self.positions[a].lerp(&self.positions[b], t);
        self.positions.push(position);

        if let Some(normals) = &mut self.normals {
            let normal = normals[a].lerp(&normals[b], t);
            normals.push(normalize_or_zero(&normal));
        }

        if let Some(texcoords) = &mut self.texcoords {
            let texcoord = texcoords[a].lerp(&texcoords[b], t);
            texcoords.push(texcoord);
        }

        self.positions.len() as u32 - 1
    }

    pub(crate) fn set_indices(&mut self, indices: Vec<[u32; 3]>) {
        self.indices = indices;
    }

    /// The positions as a flat array of 3 scalars per vertex.
    pub fn flat_positions(&self) -> Vec<Real> {
        self.positions.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
    }

    /// The normals as a flat array of 3 scalars per vertex, empty if there are no normals.
    pub fn flat_normals(&self) -> Vec<Real> {
        self.normals
            .iter()
            .flatten()
            .flat_map(|n| [n.x, n.y, n.z])
            .collect()
    }

    /// The texture coordinates as a flat array of 2 scalars per vertex, empty if there are none.
    pub fn flat_texcoords(&self) -> Vec<Real> {
        self.texcoords
            .iter()
            .flatten()
            .flat_map(|t| [t.x, t.y])
            .collect()
    }

    /// The index buffer as a flat array of 3 indices per triangle.
    pub fn flat_indices(&self) -> Vec<u32> {
        self.indices.iter().flatten().copied().collect()
    }
}

fn check_stride<T>(
    buffer: &'static str,
    data: &[T],
    stride: usize,
) -> Result<(), MeshBuffersError> {
    if data.len() % stride != 0 {
        Err(MeshBuffersError::FlatBufferLength {
            buffer,
            len: data.len(),
            stride,
        })
    } else {
        Ok(())
    }
}
