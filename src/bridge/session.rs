//! Sorting session state and JS-facing queries.
//!
//! One thread-local session owns the classifier, the onboarding flow,
//! and the item queue. JS pushes frames (see `hand.rs`), then polls
//! events and reads cursor/queue state back as flat arrays.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::gesture::{GestureClassifier, HandSample, LandmarkFrame, PinchEdge};
use crate::interaction::{MachineConfig, OnboardingFlow, Phase};
use crate::queue::{QueueController, QueueEvent};

// ============================================================================
// EVENT CODES (shared contract with the JS host)
// ============================================================================

// 1..=3 are Feedback::code(), 10..=12 are CommitKind::code().
pub const EVT_PINCH_START: u32 = 4;
pub const EVT_ACTIVATED: u32 = 13;
pub const EVT_COMPLETED: u32 = 14;
pub const EVT_ONBOARDING_STEP: u32 = 20;

/// Phase code reported when no item is mid-interaction.
pub const PHASE_NONE: u32 = 255;

// ============================================================================
// SESSION STATE
// ============================================================================

struct Session {
    classifier: GestureClassifier,
    pinch_edge: PinchEdge,
    last_sample: HandSample,
    onboarding: Option<OnboardingFlow>,
    queue: Option<QueueController>,
    /// Pending [code, payload] pairs awaiting a JS poll.
    events: Vec<u32>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            classifier: GestureClassifier::default(),
            pinch_edge: PinchEdge::new(),
            last_sample: HandSample::absent(),
            onboarding: None,
            queue: None,
            events: Vec::new(),
        }
    }
}

thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::default());
}

impl Session {
    /// Classify one frame and advance whatever is active. The cursor and
    /// pinch edge run on every frame; the queue only becomes interactive
    /// once onboarding is done.
    fn on_frame(&mut self, frame: Option<&LandmarkFrame>, now_ms: f64) {
        let sample = self.classifier.classify(frame);
        self.last_sample = sample;

        if self.pinch_edge.update(&sample) {
            self.events.extend([EVT_PINCH_START, 0]);
        }

        if let Some(flow) = self.onboarding.as_mut() {
            if flow.update(&sample, now_ms) {
                self.events.extend([EVT_ONBOARDING_STEP, flow.step().code()]);
            }
            if !flow.is_done() {
                return;
            }
        }

        if let Some(queue) = self.queue.as_mut() {
            for event in queue.on_sample(&sample, now_ms) {
                match event {
                    QueueEvent::Feedback(f) => self.events.extend([f.code(), 0]),
                    QueueEvent::Committed { kind, item } => {
                        self.events.extend([kind.code(), item]);
                    }
                    QueueEvent::Activated(item) => self.events.extend([EVT_ACTIVATED, item]),
                    QueueEvent::Completed => self.events.extend([EVT_COMPLETED, 0]),
                }
            }
        }
    }
}

/// Internal entry point used by the landmark bridge.
pub(crate) fn session_on_frame(frame: Option<&LandmarkFrame>, now_ms: f64) {
    SESSION.with(|cell| cell.borrow_mut().on_frame(frame, now_ms));
}

// ============================================================================
// WASM API - session lifecycle
// ============================================================================

/// Start a sorting session over `item_count` items (ids 0..item_count).
/// The order is a uniform random permutation, fixed for the session.
/// Replaces any previous session.
#[wasm_bindgen]
pub fn start_session(item_count: u32, viewport_width: f32, viewport_height: f32) {
    let config = MachineConfig {
        viewport: (viewport_width, viewport_height),
        ..MachineConfig::default()
    };
    SESSION.with(|cell| {
        let mut session = cell.borrow_mut();
        session.onboarding = Some(OnboardingFlow::default());
        session.queue = Some(QueueController::new(
            (0..item_count).collect(),
            config,
            js_sys::Math::random,
        ));
        session.events.clear();
        web_sys::console::log_1(&format!("Session started: {} items", item_count).into());
    });
}

/// Tear down the session: drops the queue, onboarding progress, pending
/// events, and smoothing history. The host stops the camera and closes
/// the detector on its side.
#[wasm_bindgen]
pub fn end_session() {
    SESSION.with(|cell| {
        let mut session = cell.borrow_mut();
        *session = Session::default();
    });
}

/// Skip the remaining onboarding steps.
#[wasm_bindgen]
pub fn skip_onboarding() {
    SESSION.with(|cell| {
        if let Some(flow) = cell.borrow_mut().onboarding.as_mut() {
            flow.skip();
        }
    });
}

// ============================================================================
// WASM API - queries
// ============================================================================

/// Drain pending events as flat [code, payload] pairs.
#[wasm_bindgen]
pub fn poll_events() -> Vec<u32> {
    SESSION.with(|cell| std::mem::take(&mut cell.borrow_mut().events))
}

/// Current cursor as [x, y, pinching, fist], or None while no hand is
/// visible.
#[wasm_bindgen]
pub fn cursor() -> Option<Vec<f32>> {
    SESSION.with(|cell| {
        let session = cell.borrow();
        let s = &session.last_sample;
        s.pos.map(|(x, y)| {
            vec![
                x,
                y,
                if s.is_pinching { 1.0 } else { 0.0 },
                if s.is_fist { 1.0 } else { 0.0 },
            ]
        })
    })
}

/// Live drag offset of the active item as [dx, dy] in scaled px, or None
/// when nothing is being dragged.
#[wasm_bindgen]
pub fn drag_offset() -> Option<Vec<f32>> {
    SESSION.with(|cell| {
        let session = cell.borrow();
        let machine = session.queue.as_ref()?.machine()?;
        if machine.phase() == Phase::Dragging {
            let (dx, dy) = machine.offset();
            Some(vec![dx, dy])
        } else {
            None
        }
    })
}

/// Interaction phase of the active item (Phase::code), or PHASE_NONE.
#[wasm_bindgen]
pub fn phase_code() -> u32 {
    SESSION.with(|cell| {
        cell.borrow()
            .queue
            .as_ref()
            .and_then(|q| q.machine())
            .map(|m| m.phase().code())
            .unwrap_or(PHASE_NONE)
    })
}

/// Id of the active (head) item, if the session is running.
#[wasm_bindgen]
pub fn active_item() -> Option<u32> {
    SESSION.with(|cell| cell.borrow().queue.as_ref().and_then(|q| q.active_item()))
}

/// Id of the on-deck item (rendered behind the active one).
#[wasm_bindgen]
pub fn on_deck_item() -> Option<u32> {
    SESSION.with(|cell| cell.borrow().queue.as_ref().and_then(|q| q.on_deck_item()))
}

/// Running tallies as [left, right, deleted].
#[wasm_bindgen]
pub fn tallies() -> Vec<u32> {
    SESSION.with(|cell| {
        let t = cell
            .borrow()
            .queue
            .as_ref()
            .map(|q| q.tallies())
            .unwrap_or_default();
        vec![t.left, t.right, t.deleted]
    })
}

/// Whether every item has been committed.
#[wasm_bindgen]
pub fn is_completed() -> bool {
    SESSION.with(|cell| {
        cell.borrow()
            .queue
            .as_ref()
            .map(|q| q.is_completed())
            .unwrap_or(false)
    })
}

/// Current onboarding step (OnboardingStep::code); Done once finished
/// or when no session is running.
#[wasm_bindgen]
pub fn onboarding_step() -> u32 {
    SESSION.with(|cell| {
        cell.borrow()
            .onboarding
            .as_ref()
            .map(|f| f.step().code())
            .unwrap_or(crate::interaction::OnboardingStep::Done.code())
    })
}
