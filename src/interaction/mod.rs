//! Interaction module - per-item state machine, events, onboarding.
//!
//! Re-exports only. All logic in submodules.

mod events;
mod machine;
mod onboarding;

pub use events::{CommitKind, Feedback, MachineEvent};
pub use machine::{InteractionMachine, MachineConfig, Phase};
pub use onboarding::{OnboardingConfig, OnboardingFlow, OnboardingStep};
