//! Frame driver - one tick per display refresh
//!
//! JavaScript calls `frame(now_ms)` from a requestAnimationFrame loop.
//! Each tick: sample input, advance the scene by the elapsed wall time,
//! evaluate the pose and hand the draw list to the renderer. All mutable
//! demo state is owned here; the update step and evaluator receive it by
//! reference.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::keyboard;
use crate::renderer;
use crate::scene::{self, KinematicChain, SceneState};
use nalgebra::Matrix4;

/// Everything the driver owns across ticks
struct ArmDemo {
    scene: SceneState,
    chain: KinematicChain,
    view: Matrix4<f32>,
    prev_time_ms: Option<f64>,
}

impl ArmDemo {
    fn new() -> Self {
        Self {
            scene: SceneState::new(),
            chain: KinematicChain::arm(),
            view: scene::view_matrix(),
            prev_time_ms: None,
        }
    }
}

thread_local! {
    static DEMO: RefCell<ArmDemo> = RefCell::new(ArmDemo::new());
}

/// Advance and render one frame. `now_ms` is the rAF timestamp.
#[wasm_bindgen]
pub fn frame(now_ms: f64) {
    DEMO.with(|demo_cell| {
        let mut demo = demo_cell.borrow_mut();

        // Time-corrected animation; the very first tick elapses zero so the
        // model never jumps on startup.
        let elapsed = match demo.prev_time_ms {
            Some(prev) => (((now_ms - prev) / 1000.0).max(0.0)) as f32,
            None => 0.0,
        };
        demo.prev_time_ms = Some(now_ms);

        let input = keyboard::snapshot();
        let speed_before = demo.scene.speed.multiplier();
        let effects = scene::update(&mut demo.scene, elapsed, &input);

        if demo.scene.speed.multiplier() != speed_before {
            web_sys::console::log_1(
                &format!("speed x{:.2}", demo.scene.speed.multiplier()).into(),
            );
        }

        if effects.projection_dirty {
            let projection =
                scene::projection_matrix(renderer::ASPECT, demo.scene.perspective.value());
            renderer::set_projection(&projection);
        }

        let draws = demo.chain.evaluate(&demo.scene, &demo.view);
        renderer::draw_segments(&draws);
    });
}
