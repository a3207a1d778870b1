//! Photosort Web - hand-gesture photo sorting engine.
//!
//! WASM core for a webcam UI: JavaScript owns the camera, the MediaPipe
//! hand landmarker, rendering, and audio; this crate turns per-frame
//! landmark samples into a smoothed cursor, debounced gesture intents
//! (pinch-drag, fist-hold), and queue commit events.
//!
//! Entry point only contains:
//! - Module declarations
//! - wasm_bindgen startup hook

pub mod bridge;
pub mod gesture;
pub mod interaction;
pub mod queue;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{hand_lost, update_hand_landmarks};

// ============================================================================
// WASM ENTRY POINT
// ============================================================================

/// Called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
