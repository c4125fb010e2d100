//! Keyframed rotations and per-fragment animation parameters.

pub use self::fragment_animator::{
    FragmentAnimator, InSpeedUp, LinearOffset, OffsetPolicy, OutSlowDown, OutSpeedUp,
};
pub use self::keyframe_timeline::{Keyframe, KeyframeTimeline};
pub use self::rigid_motion::{RigidMotion, ShardMotion};

mod fragment_animator;
mod keyframe_timeline;
mod rigid_motion;
