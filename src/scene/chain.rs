//! Kinematic chain and pose evaluator
//!
//! The arm is a fixed segment tree (upper arm → forearm → four finger slots,
//! each with a tip). Every frame the tree is walked depth-first, composing
//! each segment's local translate/rotate ops onto an accumulated transform.
//! A scoped save/restore keeps sibling branches and per-segment draw scales
//! from leaking into each other.

use nalgebra::{Matrix4, Rotation3, Vector3};

use super::state::SceneState;

/// Rigid pieces of the arm, in draw order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentId {
    UpperArm,
    Forearm,
    /// Finger slots 0-2 are fingers, slot 3 is the thumb
    FingerBase(usize),
    FingerTip(usize),
}

/// Geometry assets the renderer knows how to draw
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeId {
    WireCube,
    SolidCube,
    Axes,
}

/// One draw request: a segment, its world transform and the shape to use
#[derive(Clone, Copy, Debug)]
pub struct SegmentDraw {
    pub segment: SegmentId,
    pub transform: Matrix4<f32>,
    pub shape: ShapeId,
}

/// Total segments emitted per frame
pub const SEGMENT_COUNT: usize = 10;

/// Rotation axes used by the chain
#[derive(Clone, Copy, Debug)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Degrees of freedom a chain op can read from the scene state.
///
/// The thumb stores the same curl state as the fingers but is rendered with
/// the sign flipped, so it gets its own negated reference.
#[derive(Clone, Copy, Debug)]
pub enum JointRef {
    Shoulder,
    Elbow,
    FingerCurl,
    ThumbCurlNegated,
    FingerAxisX,
    FingerAxisY,
}

impl JointRef {
    fn degrees(self, state: &SceneState) -> f32 {
        match self {
            JointRef::Shoulder => state.shoulder.angle(),
            JointRef::Elbow => state.elbow.angle(),
            JointRef::FingerCurl => state.finger_curl.angle(),
            JointRef::ThumbCurlNegated => -state.thumb_curl.angle(),
            JointRef::FingerAxisX => state.finger_axis_x.angle(),
            JointRef::FingerAxisY => state.finger_axis_y.angle(),
        }
    }
}

/// A local transform step linking a segment to its parent frame
#[derive(Clone, Copy, Debug)]
pub enum LocalOp {
    Translate(f32, f32, f32),
    Rotate(Axis, JointRef),
}

impl LocalOp {
    fn matrix(&self, state: &SceneState) -> Matrix4<f32> {
        match *self {
            LocalOp::Translate(x, y, z) => Matrix4::new_translation(&Vector3::new(x, y, z)),
            LocalOp::Rotate(axis, joint) => rotation_deg(axis, joint.degrees(state)),
        }
    }
}

/// Axis-angle rotation from degrees
pub fn rotation_deg(axis: Axis, degrees: f32) -> Matrix4<f32> {
    let unit = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };
    Rotation3::from_axis_angle(&unit, degrees.to_radians()).to_homogeneous()
}

/// Accumulated model-view transform with scoped save/restore.
///
/// `scoped` snapshots the current matrix, runs the closure, and restores the
/// snapshot on the way out. Restoration is unconditional, so no branch of
/// the walk can leave its transform behind for a sibling.
pub struct MatrixStack {
    current: Matrix4<f32>,
}

impl MatrixStack {
    pub fn new(base: Matrix4<f32>) -> Self {
        Self { current: base }
    }

    pub fn current(&self) -> &Matrix4<f32> {
        &self.current
    }

    /// Right-multiply a local transform onto the accumulated one
    pub fn apply(&mut self, local: &Matrix4<f32>) {
        self.current *= local;
    }

    /// Run `f` in a saved scope; the pre-scope matrix is restored exactly
    /// (bitwise) afterwards.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut MatrixStack) -> R) -> R {
        let saved = self.current;
        let result = f(self);
        self.current = saved;
        result
    }
}

/// One node of the segment tree
struct SegmentNode {
    id: SegmentId,
    /// Local ops, inherited by children (joint positioning)
    ops: Vec<LocalOp>,
    /// Visual proportions, applied only to this segment's drawn copy
    draw_scale: [f32; 3],
    children: Vec<SegmentNode>,
}

/// The fixed arm hierarchy. Built once at startup; only the joint values
/// read through `JointRef` change afterwards.
pub struct KinematicChain {
    root: SegmentNode,
}

impl KinematicChain {
    /// The demo's arm: shoulder-driven upper arm, elbow-driven forearm,
    /// three fingers and a thumb, each with a cumulative-curl tip.
    pub fn arm() -> Self {
        let mut slots = Vec::with_capacity(4);
        for slot in 0..3 {
            slots.push(SegmentNode {
                id: SegmentId::FingerBase(slot),
                ops: vec![
                    // Knuckle row above the forearm end, fanned out in z
                    LocalOp::Translate(1.3, 0.05 + 0.3, -0.2 + slot as f32 * 0.2),
                    // Rotate about the knuckle, not the segment center
                    LocalOp::Translate(-0.4, 0.0, 0.0),
                    LocalOp::Rotate(Axis::X, JointRef::FingerAxisX),
                    LocalOp::Rotate(Axis::Y, JointRef::FingerAxisY),
                    LocalOp::Rotate(Axis::Z, JointRef::FingerCurl),
                    LocalOp::Translate(0.4, 0.0, 0.0),
                ],
                draw_scale: [0.8, 0.2, 0.5],
                children: vec![SegmentNode {
                    id: SegmentId::FingerTip(slot),
                    ops: vec![
                        LocalOp::Translate(0.6, -0.2, 0.0),
                        // Tip curls again relative to the base: cumulative bend
                        LocalOp::Rotate(Axis::Z, JointRef::FingerCurl),
                    ],
                    draw_scale: [0.2, 0.5, 0.5],
                    children: Vec::new(),
                }],
            });
        }

        // Thumb: below the forearm end, no lateral fan, curl sign flipped
        slots.push(SegmentNode {
            id: SegmentId::FingerBase(3),
            ops: vec![
                LocalOp::Translate(1.3, -0.2, 0.0),
                LocalOp::Translate(-0.4, 0.0, 0.0),
                LocalOp::Rotate(Axis::X, JointRef::FingerAxisX),
                LocalOp::Rotate(Axis::Y, JointRef::FingerAxisY),
                LocalOp::Rotate(Axis::Z, JointRef::ThumbCurlNegated),
                LocalOp::Translate(0.4, 0.0, 0.0),
            ],
            draw_scale: [0.8, 0.2, 0.5],
            children: vec![SegmentNode {
                id: SegmentId::FingerTip(3),
                ops: vec![
                    LocalOp::Translate(0.5, 0.2, 0.0),
                    LocalOp::Rotate(Axis::Z, JointRef::ThumbCurlNegated),
                ],
                draw_scale: [0.2, 0.5, 0.5],
                children: Vec::new(),
            }],
        });

        let forearm = SegmentNode {
            id: SegmentId::Forearm,
            ops: vec![
                LocalOp::Translate(1.0, 0.0, 0.0),
                LocalOp::Rotate(Axis::Z, JointRef::Elbow),
                LocalOp::Translate(1.0, 0.0, 0.0),
            ],
            draw_scale: [2.0, 0.4, 1.0],
            children: slots,
        };

        let upper_arm = SegmentNode {
            id: SegmentId::UpperArm,
            ops: vec![
                LocalOp::Translate(-2.0, 0.0, 0.0),
                LocalOp::Rotate(Axis::Z, JointRef::Shoulder),
                LocalOp::Translate(1.0, 0.0, 0.0),
            ],
            draw_scale: [2.0, 0.4, 1.0],
            children: vec![forearm],
        };

        Self { root: upper_arm }
    }

    /// Produce the frame's draw list: one (segment, world transform, shape)
    /// per rigid piece, in fixed order (upper arm, forearm, then per slot
    /// base and tip).
    pub fn evaluate(&self, state: &SceneState, view: &Matrix4<f32>) -> Vec<SegmentDraw> {
        let shape = if state.wireframe.value() {
            ShapeId::WireCube
        } else {
            ShapeId::SolidCube
        };

        // The whole-scene orbit sits between the camera and the chain root
        let base = view
            * rotation_deg(Axis::X, state.view_orbit_x.angle())
            * rotation_deg(Axis::Y, state.view_orbit_y.angle());

        let mut stack = MatrixStack::new(base);
        let mut out = Vec::with_capacity(SEGMENT_COUNT);
        Self::walk(&self.root, state, shape, &mut stack, &mut out);
        out
    }

    fn walk(
        node: &SegmentNode,
        state: &SceneState,
        shape: ShapeId,
        stack: &mut MatrixStack,
        out: &mut Vec<SegmentDraw>,
    ) {
        stack.scoped(|s| {
            for op in &node.ops {
                s.apply(&op.matrix(state));
            }

            // Scale only the drawn copy; children inherit the unscaled frame
            let [sx, sy, sz] = node.draw_scale;
            let world = s.current() * Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz));
            out.push(SegmentDraw {
                segment: node.id,
                transform: world,
                shape,
            });

            for child in &node.children {
                Self::walk(child, state, shape, s, out);
            }
        });
    }
}
