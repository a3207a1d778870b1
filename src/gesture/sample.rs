//! Classified per-frame hand sample - the unit of communication between
//! the classifier and every consumer.

/// One classified video frame. Immutable once produced.
///
/// `pos` is `None` iff no hand was visible that frame. Pinch and fist are
/// not mutually exclusive; consumers define precedence.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandSample {
    /// Smoothed pointer position in normalized [0,1] coordinates.
    pub pos: Option<(f32, f32)>,
    /// Thumb tip and index tip within the pinch threshold.
    pub is_pinching: bool,
    /// All four non-thumb fingertips within the fist threshold of the wrist.
    pub is_fist: bool,
}

impl HandSample {
    /// The sample emitted for a frame with no visible hand.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Whether a hand was visible this frame.
    pub fn hand_visible(&self) -> bool {
        self.pos.is_some()
    }

    /// Whether the hand is open (neither pinching nor fisted).
    pub fn is_open(&self) -> bool {
        !self.is_pinching && !self.is_fist
    }
}
