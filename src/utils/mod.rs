//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::{ccw_face_normal, scaled_face_normal};
pub use self::normalize_or_zero::normalize_or_zero;

mod ccw_face_normal;
mod normalize_or_zero;
