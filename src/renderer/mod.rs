//! Renderer module - WebGPU rendering for the arm segments
//!
//! Re-exports only. All logic in submodules.

#[cfg(target_arch = "wasm32")]
mod frame;
mod shapes;
#[cfg(target_arch = "wasm32")]
mod state;

#[cfg(target_arch = "wasm32")]
pub use frame::{draw_segments, set_projection};
pub use shapes::{build_shapes, PrimitiveKind, Shape, ShapeSet, Vertex};
#[cfg(target_arch = "wasm32")]
pub use state::{initialize_gpu, GpuStateError, ASPECT, CANVAS_HEIGHT, CANVAS_WIDTH};
