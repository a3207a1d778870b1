//! Landmark ingestion and detector status.
//!
//! JS runs the hand landmarker per video frame and calls
//! `update_hand_landmarks` (hand found) or `hand_lost` (no hand).
//! Detector lifecycle failures are reported here so the host can tell
//! "no hand yet" apart from "the tracker will never produce samples".

use std::cell::Cell;

use wasm_bindgen::prelude::*;

use crate::gesture::{LandmarkFrame, LANDMARK_COUNT};

use super::session::session_on_frame;

// ============================================================================
// TRACKER STATUS
// ============================================================================

/// Landmark source lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerStatus {
    /// Model/camera still starting up.
    Initializing,
    /// Producing frames.
    Ready,
    /// Terminal for the session: camera denied or model load failed.
    Unavailable,
}

impl TrackerStatus {
    pub fn code(&self) -> u32 {
        match self {
            Self::Initializing => 0,
            Self::Ready => 1,
            Self::Unavailable => 2,
        }
    }
}

thread_local! {
    static TRACKER: Cell<TrackerStatus> = Cell::new(TrackerStatus::Initializing);
}

/// Called from JS once the landmarker and camera stream are up.
#[wasm_bindgen]
pub fn set_tracker_ready() {
    TRACKER.with(|t| t.set(TrackerStatus::Ready));
    web_sys::console::log_1(&"Hand tracker ready".into());
}

/// Called from JS when the landmarker or camera failed to initialize.
/// Distinct from "no hand visible": no samples will ever arrive.
#[wasm_bindgen]
pub fn set_tracker_failed() {
    TRACKER.with(|t| t.set(TrackerStatus::Unavailable));
    web_sys::console::warn_1(&"Hand tracker unavailable".into());
}

/// Reset to Initializing (detector closed on the JS side).
#[wasm_bindgen]
pub fn reset_tracker() {
    TRACKER.with(|t| t.set(TrackerStatus::Initializing));
}

/// Current tracker status (TrackerStatus::code).
#[wasm_bindgen]
pub fn tracker_status() -> u32 {
    TRACKER.with(|t| t.get().code())
}

// ============================================================================
// WASM API - per-frame input
// ============================================================================

/// Called from JS with a flat Float32Array of 63 values
/// (21 landmarks x [x, y, z]; z is ignored by this 2D pipeline).
#[wasm_bindgen]
pub fn update_hand_landmarks(data: &[f32]) {
    let frame = match LandmarkFrame::from_flat(data) {
        Some(f) => f,
        None => {
            web_sys::console::warn_1(
                &format!(
                    "Invalid landmark data length: {} (expected {})",
                    data.len(),
                    LANDMARK_COUNT * 3
                )
                .into(),
            );
            return;
        }
    };
    session_on_frame(Some(&frame), js_sys::Date::now());
}

/// Called from JS for a frame in which no hand was detected.
#[wasm_bindgen]
pub fn hand_lost() {
    session_on_frame(None, js_sys::Date::now());
}
