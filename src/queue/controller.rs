//! Item queue controller.
//!
//! Owns the shuffled sequence of item ids, lends the head to a single
//! interaction state machine, tallies commit outcomes, and advances the
//! queue until the Completed terminal state.

use std::collections::VecDeque;

use crate::interaction::{CommitKind, Feedback, InteractionMachine, MachineConfig, MachineEvent};
use crate::gesture::HandSample;

use super::shuffle::shuffle;

/// Running outcome counters. Monotonically increasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tallies {
    pub left: u32,
    pub right: u32,
    pub deleted: u32,
}

impl Tallies {
    pub fn total(&self) -> u32 {
        self.left + self.right + self.deleted
    }

    fn record(&mut self, kind: CommitKind) {
        match kind {
            CommitKind::SortLeft => self.left += 1,
            CommitKind::SortRight => self.right += 1,
            CommitKind::Delete => self.deleted += 1,
        }
    }
}

/// Event emitted by one controller update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueEvent {
    /// Presentation cue forwarded from the active machine.
    Feedback(Feedback),
    /// An item left the queue with a definite outcome.
    Committed { kind: CommitKind, item: u32 },
    /// A new item became head-of-queue and interactive.
    Activated(u32),
    /// The queue is empty; tallies are final.
    Completed,
}

/// Queue of sortable items. The head is active, position 1 is on-deck
/// (rendered only). Mutated solely in response to commit events.
pub struct QueueController {
    items: VecDeque<u32>,
    machine: Option<InteractionMachine>,
    machine_config: MachineConfig,
    tallies: Tallies,
    completed: bool,
}

impl QueueController {
    /// Build a controller over `ids`, shuffled once with `rand`.
    /// The order never changes again for the session.
    pub fn new(ids: Vec<u32>, config: MachineConfig, rand: impl FnMut() -> f64) -> Self {
        let mut ids = ids;
        shuffle(&mut ids, rand);
        let mut controller = Self {
            items: ids.into(),
            machine: None,
            machine_config: config,
            tallies: Tallies::default(),
            completed: false,
        };
        if controller.items.is_empty() {
            controller.completed = true;
        } else {
            controller.activate_head();
        }
        controller
    }

    /// Bind a fresh machine to the current head. All guards and timers
    /// start at initial values; nothing leaks from the previous item.
    fn activate_head(&mut self) {
        self.machine = Some(InteractionMachine::new(self.machine_config.clone()));
    }

    pub fn active_item(&self) -> Option<u32> {
        self.items.front().copied()
    }

    pub fn on_deck_item(&self) -> Option<u32> {
        self.items.get(1).copied()
    }

    pub fn tallies(&self) -> Tallies {
        self.tallies
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn remaining(&self) -> usize {
        self.items.len()
    }

    /// The machine bound to the active item, if any.
    pub fn machine(&self) -> Option<&InteractionMachine> {
        self.machine.as_ref()
    }

    /// Feed one classified frame to the active machine and apply any
    /// resulting commit. Commits are consumed synchronously, so there is
    /// never more than one machine or one in-flight sample.
    pub fn on_sample(&mut self, sample: &HandSample, now_ms: f64) -> Vec<QueueEvent> {
        let mut events = Vec::new();
        if self.completed {
            return events;
        }

        let machine = match self.machine.as_mut() {
            Some(m) => m,
            None => return events,
        };

        for event in machine.update(sample, now_ms) {
            match event {
                MachineEvent::Feedback(f) => events.push(QueueEvent::Feedback(f)),
                MachineEvent::Commit(kind) => {
                    let item = self
                        .items
                        .pop_front()
                        .expect("commit with an empty queue");
                    self.tallies.record(kind);
                    events.push(QueueEvent::Committed { kind, item });

                    if let Some(&next) = self.items.front() {
                        self.activate_head();
                        events.push(QueueEvent::Activated(next));
                    } else {
                        self.machine = None;
                        self.completed = true;
                        events.push(QueueEvent::Completed);
                    }
                    // The old machine is gone; stop processing its events.
                    break;
                }
            }
        }

        events
    }
}

// ============================================================================
// TESTS
// ============================================================================
