//! Scene state - joint angles, toggles and speed control
//!
//! All mutable animation state lives in one `SceneState` aggregate owned by
//! the frame driver. The update step mutates it; the pose evaluator only
//! reads it.

/// A joint with hard angular limits, in degrees.
///
/// Raising or lowering pins exactly to the bound when the step would cross
/// it, so variable frame times can never leave the angle drifting past a
/// limit by an epsilon.
#[derive(Clone, Copy, Debug)]
pub struct ClampedJoint {
    angle: f32,
    min: f32,
    max: f32,
}

impl ClampedJoint {
    pub fn new(angle: f32, min: f32, max: f32) -> Self {
        Self {
            angle: angle.clamp(min, max),
            min,
            max,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Increase toward the upper bound, pinning at it
    pub fn raise(&mut self, delta: f32) {
        self.angle = (self.angle + delta).min(self.max);
    }

    /// Decrease toward the lower bound, pinning at it
    pub fn lower(&mut self, delta: f32) {
        self.angle = (self.angle - delta).max(self.min);
    }
}

/// An angle with wrap-around semantics, in degrees.
///
/// Advancing applies a signed modulo 360: driving past a full turn wraps, and
/// decreasing past zero yields a negative value. Downstream rotation matrices
/// accept either sign, so the raw signed result is kept.
#[derive(Clone, Copy, Debug, Default)]
pub struct WrappedAngle {
    angle: f32,
}

impl WrappedAngle {
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn advance(&mut self, delta: f32) {
        self.angle = (self.angle + delta) % 360.0;
    }
}

/// Animation speed multiplier, clamped to [0.25, 3.0] in 0.25 steps
#[derive(Clone, Copy, Debug)]
pub struct SpeedState {
    multiplier: f32,
    step: f32,
}

pub const SPEED_MIN: f32 = 0.25;
pub const SPEED_MAX: f32 = 3.0;
pub const SPEED_STEP: f32 = 0.25;

impl SpeedState {
    pub fn new() -> Self {
        Self {
            multiplier: 1.0,
            step: SPEED_STEP,
        }
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn increase(&mut self) {
        self.multiplier = (self.multiplier + self.step).min(SPEED_MAX);
    }

    pub fn decrease(&mut self) {
        self.multiplier = (self.multiplier - self.step).max(SPEED_MIN);
    }
}

impl Default for SpeedState {
    fn default() -> Self {
        Self::new()
    }
}

/// Edge-detection states for a toggle key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EdgeState {
    Released,
    Pressed,
}

/// A boolean display option flipped by a key press edge.
///
/// Modeled as a two-state machine: only the Released→Pressed transition
/// flips the value. Holding the key across many frames is a single press,
/// and releasing never fires.
#[derive(Clone, Copy, Debug)]
pub struct EdgeToggle {
    value: bool,
    edge: EdgeState,
}

impl EdgeToggle {
    pub fn new(value: bool) -> Self {
        Self {
            value,
            edge: EdgeState::Released,
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    /// Feed the current held state of the bound key.
    ///
    /// Returns true on the frame the toggle fired.
    pub fn sample(&mut self, held: bool) -> bool {
        match (self.edge, held) {
            (EdgeState::Released, true) => {
                self.edge = EdgeState::Pressed;
                self.value = !self.value;
                true
            }
            (EdgeState::Pressed, false) => {
                self.edge = EdgeState::Released;
                false
            }
            _ => false,
        }
    }
}

/// Full mutable state of the demo, created once at startup.
///
/// Initial pose: arm straight, fingers and thumb fully curled back (-45),
/// wireframe rendering, perspective projection.
#[derive(Clone, Debug)]
pub struct SceneState {
    /// Shoulder rotation about Z, [-90, 90]
    pub shoulder: ClampedJoint,
    /// Elbow rotation about Z, [-144, 0] (never hyperextends)
    pub elbow: ClampedJoint,
    /// Curl shared by the three fingers, [-45, 45]
    pub finger_curl: ClampedJoint,
    /// Thumb curl, same bounds and delta as the fingers; the chain renders
    /// it with a negated sign
    pub thumb_curl: ClampedJoint,
    /// Whole-scene orbit around X and Y, signed mod 360
    pub view_orbit_x: WrappedAngle,
    pub view_orbit_y: WrappedAngle,
    /// Finger base rotation around X and Y, signed mod 360
    pub finger_axis_x: WrappedAngle,
    pub finger_axis_y: WrappedAngle,
    pub speed: SpeedState,
    /// Wire cube vs solid cube for every arm segment
    pub wireframe: EdgeToggle,
    /// Perspective vs orthographic projection
    pub perspective: EdgeToggle,
}

impl SceneState {
    pub fn new() -> Self {
        Self {
            shoulder: ClampedJoint::new(0.0, -90.0, 90.0),
            elbow: ClampedJoint::new(0.0, -144.0, 0.0),
            finger_curl: ClampedJoint::new(-45.0, -45.0, 45.0),
            thumb_curl: ClampedJoint::new(-45.0, -45.0, 45.0),
            view_orbit_x: WrappedAngle::default(),
            view_orbit_y: WrappedAngle::default(),
            finger_axis_x: WrappedAngle::default(),
            finger_axis_y: WrappedAngle::default(),
            speed: SpeedState::new(),
            wireframe: EdgeToggle::new(true),
            perspective: EdgeToggle::new(true),
        }
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}
