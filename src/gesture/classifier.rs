//! Per-frame gesture classification: pinch, fist, and smoothed pointer.
//!
//! Consumes one landmark frame (or a no-hand signal) and produces one
//! `HandSample`. Thresholds are distance rules in normalized space, no ML.

use super::landmarks::{LandmarkFrame, FINGERTIPS};
use super::sample::HandSample;
use super::smoothing::{EmaFilter2D, DEFAULT_ALPHA};

/// Classification thresholds.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Maximum thumb-tip/index-tip distance for a pinch (exclusive).
    pub pinch_threshold: f32,
    /// Maximum fingertip-to-wrist distance for a fist (exclusive, all four).
    pub fist_threshold: f32,
    /// Pointer smoothing factor.
    pub smoothing_alpha: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: 0.08,
            fist_threshold: 0.25,
            smoothing_alpha: DEFAULT_ALPHA,
        }
    }
}

/// Stateful per-frame classifier. The only state is the smoothing filter,
/// owned here and invisible to consumers.
pub struct GestureClassifier {
    config: ClassifierConfig,
    smoother: EmaFilter2D,
}

impl GestureClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        let smoother = EmaFilter2D::new(config.smoothing_alpha);
        Self { config, smoother }
    }

    /// Classify one frame. `None` means the detector saw no hand.
    pub fn classify(&mut self, frame: Option<&LandmarkFrame>) -> HandSample {
        let frame = match frame {
            Some(f) => f,
            None => {
                // Reset so the cursor does not drift back from a stale
                // position when the hand reappears somewhere else.
                self.smoother.reset();
                return HandSample::absent();
            }
        };

        let pinch_dist = frame.thumb_tip().distance_to(frame.index_tip());
        let is_pinching = pinch_dist < self.config.pinch_threshold;

        let wrist = frame.wrist();
        let is_fist = FINGERTIPS
            .iter()
            .all(|&tip| frame.points[tip].distance_to(wrist) < self.config.fist_threshold);

        // Mirror X so the cursor moves like a reflection of the hand.
        let raw = (1.0 - frame.index_tip().x, frame.index_tip().y);
        let (x, y) = self.smoother.filter(raw);

        HandSample {
            pos: Some((x, y)),
            is_pinching,
            is_fist,
        }
    }

    /// Drop smoothing history (session teardown).
    pub fn reset(&mut self) {
        self.smoother.reset();
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

/// Rising-edge detector on the pinch flag.
///
/// The host uses the edge to synthesize a click at the cursor position;
/// the core only reports that the edge happened.
#[derive(Default)]
pub struct PinchEdge {
    was_pinching: bool,
}

impl PinchEdge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly once per not-pinching -> pinching transition
    /// while the hand is visible.
    pub fn update(&mut self, sample: &HandSample) -> bool {
        let started = sample.is_pinching && !self.was_pinching && sample.hand_visible();
        self.was_pinching = sample.is_pinching;
        started
    }

    pub fn reset(&mut self) {
        self.was_pinching = false;
    }
}

// ============================================================================
// TEST HELPERS
// ============================================================================

#[cfg(test)]
pub(crate) fn frame_with(
    wrist: (f32, f32),
    thumb: (f32, f32),
    index: (f32, f32),
    other_tips: (f32, f32),
) -> LandmarkFrame {
    use super::landmarks::{
        Landmark, INDEX_TIP, LANDMARK_COUNT, MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_TIP, WRIST,
    };
    let mut points = [Landmark::default(); LANDMARK_COUNT];
    points[WRIST] = Landmark::new(wrist.0, wrist.1);
    points[THUMB_TIP] = Landmark::new(thumb.0, thumb.1);
    points[INDEX_TIP] = Landmark::new(index.0, index.1);
    for tip in [MIDDLE_TIP, RING_TIP, PINKY_TIP] {
        points[tip] = Landmark::new(other_tips.0, other_tips.1);
    }
    LandmarkFrame::new(points)
}

// ============================================================================
// TESTS
// ============================================================================
