//! Gesture pipeline - landmark model, smoothing, and per-frame classification.
//!
//! Re-exports only. All logic in submodules.

mod classifier;
mod landmarks;
mod sample;
mod smoothing;

pub use classifier::{ClassifierConfig, GestureClassifier, PinchEdge};
pub use landmarks::{
    Landmark, LandmarkFrame, FINGERTIPS, INDEX_TIP, LANDMARK_COUNT, MIDDLE_TIP, PINKY_TIP,
    RING_TIP, THUMB_TIP, WRIST,
};
pub use sample::HandSample;
pub use smoothing::{EmaFilter, EmaFilter2D, DEFAULT_ALPHA};
