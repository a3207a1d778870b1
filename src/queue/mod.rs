//! Queue module - item ordering, activation, tallies, completion.
//!
//! Re-exports only. All logic in submodules.

mod controller;
mod shuffle;

pub use controller::{QueueController, QueueEvent, Tallies};
pub use shuffle::shuffle;
