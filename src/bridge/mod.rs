//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod frame;
mod keyboard;

pub use frame::frame;
pub use keyboard::{key_down, key_up, snapshot};
