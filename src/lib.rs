/*!
shatter
========

**shatter** splits a closed triangle mesh into Voronoi-like fragments, one per seed
point, and gives every fragment a rotation axis and a phase offset so the pieces
can be animated out of sync.

```
# #[cfg(all(feature = "dim3", feature = "f32"))] {
use shatter3d::math::{Point, Vector};
use shatter3d::partitioning::PartitionBuilder;
use shatter3d::transformation::cuboid;

let mesh = cuboid(Vector::new(1.0, 1.0, 1.0));
let seeds = [Point::new(-1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0)];
let shattered = PartitionBuilder::new().build(mesh, &seeds).unwrap();

for (id, fragment) in shattered.fragments_with_ids() {
    let range = shattered.fragment_range(id);
    assert_eq!(range.len(), fragment.faces.len());
}
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod math;
pub mod motion;
pub mod partitioning;
pub mod shape;
pub mod transformation;
pub mod utils;
