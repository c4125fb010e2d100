use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use rand::Rng;

/// Scatters seeds over the horizontal footprint of a domain.
///
/// The `xz` footprint of `domain` is divided into `cells_across × cells_across` cells, and
/// `seeds_per_cell` seeds are dropped at uniformly random positions within each cell. This
/// gives a roughly even seed density without the regularity of a plain grid.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct JitteredGrid {
    /// Number of cells along each of the `x` and `z` axes.
    ///
    /// default: 20
    pub cells_across: u32,
    /// Number of seeds generated in each cell.
    ///
    /// default: 5
    pub seeds_per_cell: u32,
    /// The region covered by the grid. Only its `x` and `z` bounds are used.
    ///
    /// default: the cube `[-1, 1]³`
    pub domain: Aabb,
}

impl Default for JitteredGrid {
    fn default() -> Self {
        Self {
            cells_across: 20,
            seeds_per_cell: 5,
            domain: Aabb::from_half_extents(Point::origin(), Vector::repeat(1.0)),
        }
    }
}

impl JitteredGrid {
    /// The total number of seeds generated by [`Self::generate`].
    pub fn num_seeds(&self) -> usize {
        (self.cells_across * self.cells_across * self.seeds_per_cell) as usize
    }

    /// Generates the seeds.
    ///
    /// The `y` coordinate of each seed is given by `height(x, z)`, for example the height of a
    /// terrain at that location. Seeds are ordered cell by cell, `x`-major.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        mut height: impl FnMut(Real, Real) -> Real,
    ) -> Vec<Point<Real>> {
        let mut seeds = Vec::with_capacity(self.num_seeds());
        let mins = self.domain.mins;
        let cell = self.domain.extents() / self.cells_across as Real;

        for i in 0..self.cells_across {
            for k in 0..self.cells_across {
                for _ in 0..self.seeds_per_cell {
                    let x = mins.x + (i as Real + rng.gen::<Real>()) * cell.x;
                    let z = mins.z + (k as Real + rng.gen::<Real>()) * cell.z;
                    seeds.push(Point::new(x, height(x, z), z));
                }
            }
        }

        seeds
    }
}
