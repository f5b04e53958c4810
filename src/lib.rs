//! Robot Arm Web - interactive WebGPU jointed-arm demo
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The page calls `init()` once, forwards keydown/keyup events through
//! `key_down`/`key_up`, and calls `frame(now_ms)` from requestAnimationFrame.

#[cfg(target_arch = "wasm32")]
mod bridge;
mod renderer;
pub mod scene;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
#[cfg(target_arch = "wasm32")]
pub use bridge::{frame, key_down, key_up};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize WebGPU and upload the initial projection - must be called
/// before the first `frame`
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn init() -> Result<(), JsValue> {
    renderer::initialize_gpu().await?;

    // Startup projection: perspective, matching the initial toggle state
    let projection = scene::projection_matrix(renderer::ASPECT, true);
    renderer::set_projection(&projection);

    console_log!("✅ WebGPU initialized; robot arm ready");
    Ok(())
}
