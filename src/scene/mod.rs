//! Scene module - joint model, animation update and pose evaluation
//!
//! The testable core of the demo: no DOM, no GPU. Re-exports only, all
//! logic in submodules.

mod chain;
mod input;
mod state;
mod update;
mod view;

pub use chain::{
    rotation_deg, Axis, JointRef, KinematicChain, LocalOp, MatrixStack, SegmentDraw, SegmentId,
    ShapeId, SEGMENT_COUNT,
};
pub use input::{InputSnapshot, Key, ALL_KEYS, KEY_COUNT};
pub use state::{
    ClampedJoint, EdgeToggle, SceneState, SpeedState, WrappedAngle, SPEED_MAX, SPEED_MIN,
    SPEED_STEP,
};
pub use update::{update, FrameEffects, ARM_SPEED, CURL_SPEED, ORBIT_SPEED};
pub use view::{projection_matrix, view_matrix, FOV_Y_DEG};
