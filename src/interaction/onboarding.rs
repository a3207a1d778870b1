//! Onboarding step tracker.
//!
//! Walks a new user through raise-hand, pinch, and bin-identity steps
//! before the sorting session starts. Each step advances after a dwell
//! on an armed deadline; losing the hand during the raise-hand step
//! cancels the pending deadline instead of firing it late.

use crate::gesture::HandSample;

/// Onboarding progression. `Done` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    /// Waiting for a visible hand (800 ms steady).
    RaiseHand,
    /// Waiting for a pinch (500 ms held).
    Pinch,
    /// Showing the sort-bin identities (3500 ms dwell).
    Identity,
    /// Everything checked out; brief confirmation (1500 ms dwell).
    Ready,
    Done,
}

impl OnboardingStep {
    /// Stable code for the JS bridge.
    pub fn code(&self) -> u32 {
        match self {
            Self::RaiseHand => 0,
            Self::Pinch => 1,
            Self::Identity => 2,
            Self::Ready => 3,
            Self::Done => 4,
        }
    }
}

/// Dwell durations per step (ms).
#[derive(Debug, Clone)]
pub struct OnboardingConfig {
    pub raise_hand_ms: f64,
    pub pinch_ms: f64,
    pub identity_ms: f64,
    pub ready_ms: f64,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            raise_hand_ms: 800.0,
            pinch_ms: 500.0,
            identity_ms: 3500.0,
            ready_ms: 1500.0,
        }
    }
}

/// Debounce-timer state machine for the onboarding flow.
pub struct OnboardingFlow {
    config: OnboardingConfig,
    step: OnboardingStep,
    /// Armed deadline for the current step, cleared when its condition
    /// breaks or the step advances.
    deadline: Option<f64>,
}

impl OnboardingFlow {
    pub fn new(config: OnboardingConfig) -> Self {
        Self {
            config,
            step: OnboardingStep::RaiseHand,
            deadline: None,
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn is_done(&self) -> bool {
        self.step == OnboardingStep::Done
    }

    /// Skip the rest of the flow.
    pub fn skip(&mut self) {
        self.step = OnboardingStep::Done;
        self.deadline = None;
    }

    /// Advance on one classified frame. Returns true if the step changed.
    pub fn update(&mut self, sample: &HandSample, now_ms: f64) -> bool {
        match self.step {
            OnboardingStep::RaiseHand => {
                if sample.hand_visible() {
                    let deadline = *self
                        .deadline
                        .get_or_insert(now_ms + self.config.raise_hand_ms);
                    if now_ms >= deadline {
                        return self.advance(OnboardingStep::Pinch);
                    }
                } else {
                    // Hand lost: the pending deadline must never fire late.
                    self.deadline = None;
                }
                false
            }
            OnboardingStep::Pinch => {
                if sample.hand_visible() && sample.is_pinching {
                    let deadline = *self.deadline.get_or_insert(now_ms + self.config.pinch_ms);
                    if now_ms >= deadline {
                        return self.advance(OnboardingStep::Identity);
                    }
                } else {
                    self.deadline = None;
                }
                false
            }
            OnboardingStep::Identity => {
                let deadline = *self.deadline.get_or_insert(now_ms + self.config.identity_ms);
                if now_ms >= deadline {
                    return self.advance(OnboardingStep::Ready);
                }
                false
            }
            OnboardingStep::Ready => {
                let deadline = *self.deadline.get_or_insert(now_ms + self.config.ready_ms);
                if now_ms >= deadline {
                    return self.advance(OnboardingStep::Done);
                }
                false
            }
            OnboardingStep::Done => false,
        }
    }

    fn advance(&mut self, next: OnboardingStep) -> bool {
        self.step = next;
        self.deadline = None;
        true
    }
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new(OnboardingConfig::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================
