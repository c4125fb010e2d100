use super::fragment::connect;
use super::{
    BoundaryClassifier, Fragment, FragmentId, NearestSeedIndex, PartitionError, VertexAssignment,
};
use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::shape::MeshBuffers;
use na;

/// How a triangle straddling two fragments was detected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum StraddleKind {
    /// Two vertices share a fragment and the third one belongs elsewhere.
    TwoShared,
    /// The three vertices belong to three distinct fragments. Only the first two
    /// fragments take part in the split.
    ThreeWay,
}

/// A triangle crossing the boundary between two fragments.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Straddle {
    /// The fragment of the lone vertex.
    pub lone: FragmentId,
    /// The fragment shared by the two other vertices.
    pub shared: FragmentId,
    /// The lone vertex.
    pub apex: u32,
    /// The two other vertices, in the winding order of the original triangle starting
    /// right after `apex`.
    pub edge: [u32; 2],
    /// How this configuration was detected.
    pub kind: StraddleKind,
}

/// The result of the classification of one triangle against the fragments of its vertices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FaceClassification {
    /// The whole triangle belongs to this fragment.
    Whole(FragmentId),
    /// The triangle must be split along the boundary between two fragments.
    Straddling(Straddle),
}

/// The vertices created while splitting one triangle along a fragment boundary.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundarySplit {
    /// The fragment of the lone vertex.
    pub lone: FragmentId,
    /// The fragment of the two other vertices.
    pub shared: FragmentId,
    /// The new vertices inserted on the edges `(apex, edge[0])` and `(apex, edge[1])`.
    pub new_vertices: [u32; 2],
    /// The interpolation parameters of the new vertices along their edges. They are not
    /// clamped and may lie outside of `[0, 1]`.
    pub params: [Real; 2],
    /// How the straddling configuration was detected.
    pub kind: StraddleKind,
}

/// What happened to one original triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FaceOutcome {
    /// The triangle was added unchanged to a fragment.
    Kept(FragmentId),
    /// The triangle was replaced by three sub-triangles: two in the shared fragment and one in
    /// the lone fragment.
    Split(BoundarySplit),
    /// Boundary vertices were inserted, but the first one fell into a third fragment so no
    /// sub-triangle was emitted.
    Unresolved(BoundarySplit),
}

/// Computes where the segment `[p1, p2]` crosses the bisecting plane of two seeds.
///
/// The result `t` is such that `p1 * (1 - t) + p2 * t` lies on the plane equidistant from
/// `seed1` and `seed2`. It is not clamped to `[0, 1]`, and is infinite or NaN if the segment
/// is parallel to the plane.
pub fn bisecting_plane_parameter(
    seed1: &Point<Real>,
    seed2: &Point<Real>,
    p1: &Point<Real>,
    p2: &Point<Real>,
) -> Real {
    let plane_normal = seed2 - seed1;
    let plane_point = na::center(seed1, seed2);
    let denom = plane_normal.dot(&(p2 - p1));

    if denom.abs() <= DEFAULT_EPSILON {
        log::debug!("Segment [{p1}, {p2}] is almost parallel to the bisecting plane of {seed1} and {seed2}.");
    }

    plane_normal.dot(&(plane_point - p1)) / denom
}

/// Distributes the triangles of a mesh among fragments, inserting boundary vertices where
/// a triangle crosses from one fragment to another.
///
/// The mesh vertex buffers and the vertex assignment only grow by appending, so the
/// indices already stored in fragments stay valid.
pub struct FaceSplitter<'a> {
    mesh: &'a mut MeshBuffers,
    fragments: &'a mut [Fragment],
    assignment: &'a mut VertexAssignment,
    index: &'a NearestSeedIndex,
    classifier: BoundaryClassifier,
}

impl<'a> FaceSplitter<'a> {
    /// Creates a face splitter.
    ///
    /// `assignment` must already contain one fragment per vertex of `mesh`, and
    /// `fragments[i]` must be the fragment seeded by `index.seeds()[i]`.
    ///
    /// # Panics
    /// Panics if `assignment` does not have one entry per vertex of `mesh`, or if `fragments`
    /// and `index` do not have the same length.
    pub fn new(
        mesh: &'a mut MeshBuffers,
        fragments: &'a mut [Fragment],
        assignment: &'a mut VertexAssignment,
        index: &'a NearestSeedIndex,
        classifier: BoundaryClassifier,
    ) -> Self {
        assert_eq!(
            assignment.len(),
            mesh.num_vertices(),
            "Every vertex must be assigned to a fragment before splitting faces."
        );
        assert_eq!(
            fragments.len(),
            index.len(),
            "There must be exactly one fragment per seed."
        );

        Self {
            mesh,
            fragments,
            assignment,
            index,
            classifier,
        }
    }

    /// Is `vertex` tied, within tolerance, between its own fragment and `candidate`?
    pub fn is_near_boundary(&self, vertex: u32, candidate: FragmentId) -> bool {
        let assigned = self.assignment.get(vertex);
        self.classifier.is_near_boundary(
            self.mesh.position(vertex),
            self.index.seed(assigned),
            self.index.seed(candidate),
        )
    }

    /// Decides whether a triangle belongs entirely to one fragment or must be split.
    ///
    /// The checks run in a fixed priority order, and the first one that matches wins:
    /// 1. the whole triangle fits the fragment of `v1`, then `v2`, then `v3`;
    /// 2. `v1` and `v2` share the fragment of `v1`, then of `v2`;
    /// 3. `v1` and `v3` share the fragment of `v1`, then of `v3`;
    /// 4. `v2` and `v3` share the fragment of `v2`, then of `v3`;
    /// 5. otherwise the three fragments are distinct and the split uses the fragments of
    ///    `v1` and `v2`.
    pub fn classify_face(&self, [v1, v2, v3]: [u32; 3]) -> FaceClassification {
        let f1 = self.assignment.get(v1);
        let f2 = self.assignment.get(v2);
        let f3 = self.assignment.get(v3);
        let near = |v, f| self.is_near_boundary(v, f);
        let straddle = |lone, shared, apex, edge, kind| {
            FaceClassification::Straddling(Straddle {
                lone,
                shared,
                apex,
                edge,
                kind,
            })
        };
        let two_shared = StraddleKind::TwoShared;

        if near(v2, f1) && near(v3, f1) {
            FaceClassification::Whole(f1)
        } else if near(v3, f2) && near(v1, f2) {
            FaceClassification::Whole(f2)
        } else if near(v1, f3) && near(v2, f3) {
            FaceClassification::Whole(f3)
        } else if near(v2, f1) {
            straddle(f3, f1, v3, [v1, v2], two_shared)
        } else if near(v1, f2) {
            straddle(f3, f2, v3, [v1, v2], two_shared)
        } else if near(v3, f1) {
            straddle(f2, f1, v2, [v3, v1], two_shared)
        } else if near(v1, f3) {
            straddle(f2, f3, v2, [v3, v1], two_shared)
        } else if near(v3, f2) {
            straddle(f1, f2, v1, [v2, v3], two_shared)
        } else if near(v2, f3) {
            straddle(f1, f3, v1, [v2, v3], two_shared)
        } else {
            straddle(f1, f2, v1, [v2, v3], StraddleKind::ThreeWay)
        }
    }

    /// Classifies a triangle, then adds it to its fragment or splits it.
    pub fn check_face(&mut self, face: [u32; 3]) -> Result<FaceOutcome, PartitionError> {
        match self.classify_face(face) {
            FaceClassification::Whole(fragment) => {
                self.fragments[fragment.index()].faces.push(face);
                Ok(FaceOutcome::Kept(fragment))
            }
            FaceClassification::Straddling(straddle) => self.split_boundary(straddle),
        }
    }

    /// Splits a triangle along the bisecting plane of the lone and shared fragments.
    ///
    /// Two vertices are appended to the mesh, on the edges from `apex` to each vertex of
    /// `edge`, and assigned to their nearest fragment. If the first new vertex lies on the
    /// boundary of either fragment, the triangle is replaced by the quad `edge[1], new0, edge[0]`
    /// plus the triangle `new1, new0, edge[1]` in the shared fragment, and by the triangle
    /// `apex, new0, new1` in the lone fragment, and the two fragments become adjacent.
    /// Otherwise nothing is emitted for this triangle and the adjacencies are left untouched.
    pub fn split_boundary(&mut self, straddle: Straddle) -> Result<FaceOutcome, PartitionError> {
        let Straddle {
            lone,
            shared,
            apex,
            edge,
            kind,
        } = straddle;
        let lone_seed = self.index.seed(lone);
        let shared_seed = self.index.seed(shared);
        let apex_pt = *self.mesh.position(apex);

        let params = edge.map(|v| {
            bisecting_plane_parameter(lone_seed, shared_seed, &apex_pt, self.mesh.position(v))
        });
        let new_vertices = [
            self.mesh.push_interpolated_vertex(apex, edge[0], params[0]),
            self.mesh.push_interpolated_vertex(apex, edge[1], params[1]),
        ];

        for v in new_vertices {
            let nearest = self.index.nearest(self.mesh.position(v))?;
            self.assignment.push(nearest);
        }
        debug_assert_eq!(self.assignment.len(), self.mesh.num_vertices());

        let split = BoundarySplit {
            lone,
            shared,
            new_vertices,
            params,
            kind,
        };
        let [new0, new1] = new_vertices;

        if self.is_near_boundary(new0, lone) || self.is_near_boundary(new0, shared) {
            connect(self.fragments, lone, shared);
            let shared_faces = &mut self.fragments[shared.index()].faces;
            shared_faces.push([edge[1], new0, edge[0]]);
            shared_faces.push([new1, new0, edge[1]]);
            self.fragments[lone.index()].faces.push([apex, new0, new1]);
            Ok(FaceOutcome::Split(split))
        } else {
            log::warn!(
                "Boundary vertex {new0} between fragments {} and {} fell into fragment {}; the face ({apex}, {}, {}) was not split.",
                lone.0,
                shared.0,
                self.assignment.get(new0).0,
                edge[0],
                edge[1],
            );
            Ok(FaceOutcome::Unresolved(split))
        }
    }
}
