//! Keyboard state storage and JS bridge
//!
//! Receives keydown/keyup events from JavaScript and stores the held state
//! of every logical key plus the shift modifier. The frame driver copies
//! this into an immutable snapshot once per tick, so a mid-frame event can
//! never produce a half-updated view of the keyboard.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::scene::{InputSnapshot, Key, KEY_COUNT};

/// Latest event-driven keyboard state
#[derive(Default)]
struct KeyboardState {
    held: [bool; KEY_COUNT],
    shift: bool,
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static KEYBOARD: RefCell<KeyboardState> = RefCell::new(KeyboardState::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript on keydown with `event.key` and `event.shiftKey`
#[wasm_bindgen]
pub fn key_down(key: &str, shift: bool) {
    KEYBOARD.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        // Shift tracks every event, even ones for keys the demo ignores
        state.shift = shift;
        if let Some(k) = Key::from_event_key(key) {
            state.held[k.index()] = true;
        }
    });
}

/// Called from JavaScript on keyup
#[wasm_bindgen]
pub fn key_up(key: &str, shift: bool) {
    KEYBOARD.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        state.shift = shift;
        if let Some(k) = Key::from_event_key(key) {
            state.held[k.index()] = false;
        }
    });
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Copy the current keyboard state for this tick
pub fn snapshot() -> InputSnapshot {
    KEYBOARD.with(|state_cell| {
        let state = state_cell.borrow();
        InputSnapshot::new(state.held, state.shift)
    })
}
