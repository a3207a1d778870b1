//! Bridge module - JS <-> Rust communication.
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod hand;
mod session;

pub use hand::{
    hand_lost, reset_tracker, set_tracker_failed, set_tracker_ready, tracker_status,
    update_hand_landmarks, TrackerStatus,
};

pub use session::{
    active_item, cursor, drag_offset, end_session, is_completed, on_deck_item, onboarding_step,
    phase_code, poll_events, skip_onboarding, start_session, tallies, EVT_ACTIVATED,
    EVT_COMPLETED, EVT_ONBOARDING_STEP, EVT_PINCH_START, PHASE_NONE,
};
