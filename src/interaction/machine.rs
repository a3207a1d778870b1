//! Per-item interaction state machine.
//!
//! Drives one active item through idle -> dragging / pre-delete ->
//! sorting / deleting, one update per classified frame. Timers are armed
//! absolute deadlines cleared on every exit from the phase that armed
//! them, so a stale deadline can never fire into the wrong phase.

use crate::gesture::HandSample;

use super::events::{CommitKind, Feedback, MachineEvent};

/// Interaction lifecycle phase. `Deleting` and `Sorting` are absorbing:
/// no gesture transition leaves them, only item removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    PreDelete,
    Deleting,
    Sorting,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Deleting | Self::Sorting)
    }

    /// Stable code for the JS bridge.
    pub fn code(&self) -> u32 {
        match self {
            Self::Idle => 0,
            Self::Dragging => 1,
            Self::PreDelete => 2,
            Self::Deleting => 3,
            Self::Sorting => 4,
        }
    }
}

/// Timing and geometry thresholds for the state machine.
#[derive(Debug, Clone)]
pub struct MachineConfig {
    /// Fist hold time before delete begins (ms).
    pub fist_hold_ms: f64,
    /// Settle delay between entering Deleting and the delete commit (ms).
    pub delete_settle_ms: f64,
    /// Settle delay between entering Sorting and the sort commit (ms).
    pub sort_settle_ms: f64,
    /// Horizontal offset magnitude (scaled px) required to commit a sort.
    pub release_threshold: f32,
    /// Hand-travel multiplier applied to drag offsets.
    pub drag_gain: f32,
    /// Viewport size in px; converts normalized deltas to screen offsets.
    pub viewport: (f32, f32),
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            fist_hold_ms: 1200.0,
            delete_settle_ms: 400.0,
            sort_settle_ms: 300.0,
            release_threshold: 150.0,
            drag_gain: 1.5,
            viewport: (1920.0, 1080.0),
        }
    }
}

/// State machine bound to one active item. Exactly one instance is live
/// at a time; the queue controller discards it when the item leaves.
pub struct InteractionMachine {
    config: MachineConfig,
    phase: Phase,
    /// Pointer position at pinch start, normalized.
    drag_origin: Option<(f32, f32)>,
    /// Live drag offset in scaled px.
    offset: (f32, f32),
    /// When the current fist hold began (ms). Cleared on leaving PreDelete.
    fist_started_at: Option<f64>,
    /// Armed commit deadline. Set once on entering a terminal phase.
    commit_at: Option<(f64, CommitKind)>,
    /// True once the commit has fired; it fires exactly once.
    committed: bool,
    /// One-shot guard: the hand must open once before input is accepted,
    /// so the gesture that committed the previous item is not replayed
    /// onto this one.
    has_released: bool,
}

impl InteractionMachine {
    pub fn new(config: MachineConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            drag_origin: None,
            offset: (0.0, 0.0),
            fist_started_at: None,
            commit_at: None,
            committed: false,
            has_released: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Live drag offset in scaled px (zero outside Dragging).
    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    /// Whether the open-hand safety guard has been satisfied.
    pub fn has_released(&self) -> bool {
        self.has_released
    }

    /// Process one classified frame. Returns any feedback/commit events.
    pub fn update(&mut self, sample: &HandSample, now_ms: f64) -> Vec<MachineEvent> {
        let mut events = Vec::new();

        // Armed commit fires on schedule regardless of hand visibility.
        if let Some((deadline, kind)) = self.commit_at {
            if !self.committed && now_ms >= deadline {
                self.committed = true;
                self.commit_at = None;
                events.push(MachineEvent::Commit(kind));
            }
        }

        // Terminal phases accept no gesture transitions.
        if self.phase.is_terminal() {
            return events;
        }

        // Losing the hand mid-interaction is an implicit cancel.
        let (x, y) = match sample.pos {
            Some(pos) => pos,
            None => {
                self.reset_to_idle();
                return events;
            }
        };

        // Safety guard: ignore everything until the hand has opened once.
        if !self.has_released {
            if sample.is_open() {
                self.has_released = true;
            } else {
                return events;
            }
        }

        match self.phase {
            Phase::Idle => {
                // Fist intent is checked before pinch intent.
                if sample.is_fist {
                    self.fist_started_at = Some(now_ms);
                    self.phase = Phase::PreDelete;
                } else if sample.is_pinching {
                    self.drag_origin = Some((x, y));
                    self.phase = Phase::Dragging;
                    events.push(MachineEvent::Feedback(Feedback::Grab));
                }
            }

            Phase::PreDelete => {
                if !sample.is_fist {
                    self.fist_started_at = None;
                    self.phase = Phase::Idle;
                } else if let Some(started) = self.fist_started_at {
                    if now_ms - started > self.config.fist_hold_ms {
                        self.fist_started_at = None;
                        self.phase = Phase::Deleting;
                        self.commit_at =
                            Some((now_ms + self.config.delete_settle_ms, CommitKind::Delete));
                        events.push(MachineEvent::Feedback(Feedback::Delete));
                    }
                }
            }

            Phase::Dragging => {
                if sample.is_pinching {
                    let (ox, oy) = self.drag_origin.unwrap_or((x, y));
                    self.offset = (
                        (x - ox) * self.config.viewport.0 * self.config.drag_gain,
                        (y - oy) * self.config.viewport.1 * self.config.drag_gain,
                    );
                } else {
                    // Direction is resolved at the release instant.
                    let released_x = self.offset.0;
                    if released_x.abs() > self.config.release_threshold {
                        let kind = if released_x < 0.0 {
                            CommitKind::SortLeft
                        } else {
                            CommitKind::SortRight
                        };
                        self.drag_origin = None;
                        self.phase = Phase::Sorting;
                        self.commit_at = Some((now_ms + self.config.sort_settle_ms, kind));
                        events.push(MachineEvent::Feedback(Feedback::Drop));
                    } else {
                        // Snap back, no commit.
                        self.reset_to_idle();
                    }
                }
            }

            // Unreachable: terminal phases returned above.
            Phase::Deleting | Phase::Sorting => {}
        }

        events
    }

    /// Force Idle and clear every non-terminal timer and drag field.
    fn reset_to_idle(&mut self) {
        self.phase = Phase::Idle;
        self.fist_started_at = None;
        self.drag_origin = None;
        self.offset = (0.0, 0.0);
    }
}

// ============================================================================
// TEST HELPERS
// ============================================================================

#[cfg(test)]
pub(crate) fn open_at(x: f32, y: f32) -> HandSample {
    HandSample {
        pos: Some((x, y)),
        is_pinching: false,
        is_fist: false,
    }
}

#[cfg(test)]
pub(crate) fn pinch_at(x: f32, y: f32) -> HandSample {
    HandSample {
        pos: Some((x, y)),
        is_pinching: true,
        is_fist: false,
    }
}

#[cfg(test)]
pub(crate) fn fist_at(x: f32, y: f32) -> HandSample {
    HandSample {
        pos: Some((x, y)),
        is_pinching: false,
        is_fist: true,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// 1000x1000 viewport so a normalized delta of d maps to d*1500 px.
    fn test_config() -> MachineConfig {
        MachineConfig {
            viewport: (1000.0, 1000.0),
            ..MachineConfig::default()
        }
    }

    /// Machine with the open-hand guard already satisfied.
    fn ready_machine() -> InteractionMachine {
        let mut m = InteractionMachine::new(test_config());
        m.update(&open_at(0.5, 0.5), 0.0);
        assert!(m.has_released());
        m
    }

    fn commits(events: &[MachineEvent]) -> Vec<CommitKind> {
        events
            .iter()
            .filter_map(|e| match e {
                MachineEvent::Commit(k) => Some(*k),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_fist_enters_pre_delete() {
        let mut m = ready_machine();
        m.update(&fist_at(0.5, 0.5), 100.0);
        assert_eq!(m.phase(), Phase::PreDelete);
    }

    #[test]
    fn test_fist_priority_over_pinch() {
        let mut m = ready_machine();
        let both = HandSample {
            pos: Some((0.5, 0.5)),
            is_pinching: true,
            is_fist: true,
        };
        let events = m.update(&both, 100.0);
        assert_eq!(m.phase(), Phase::PreDelete);
        assert!(!events.contains(&MachineEvent::Feedback(Feedback::Grab)));
    }

    #[test]
    fn test_fist_released_early_returns_to_idle() {
        let mut m = ready_machine();
        m.update(&fist_at(0.5, 0.5), 100.0);
        m.update(&fist_at(0.5, 0.5), 1000.0); // 900ms held, under 1200
        let events = m.update(&open_at(0.5, 0.5), 1100.0);
        assert_eq!(m.phase(), Phase::Idle);
        assert!(commits(&events).is_empty());
        // Holding again starts a fresh timer
        m.update(&fist_at(0.5, 0.5), 1200.0);
        let events = m.update(&fist_at(0.5, 0.5), 2350.0); // 1150ms, still under
        assert_eq!(m.phase(), Phase::PreDelete);
        assert!(commits(&events).is_empty());
    }

    #[test]
    fn test_fist_hold_deletes_with_settle_delay() {
        let mut m = ready_machine();
        m.update(&fist_at(0.5, 0.5), 100.0);
        // Past the 1200ms hold
        let events = m.update(&fist_at(0.5, 0.5), 1301.0);
        assert_eq!(m.phase(), Phase::Deleting);
        assert!(events.contains(&MachineEvent::Feedback(Feedback::Delete)));
        assert!(commits(&events).is_empty());

        // Before the 400ms settle: nothing yet
        let events = m.update(&fist_at(0.5, 0.5), 1600.0);
        assert!(commits(&events).is_empty());

        // After the settle: exactly one delete commit
        let events = m.update(&fist_at(0.5, 0.5), 1701.0);
        assert_eq!(commits(&events), vec![CommitKind::Delete]);

        // Never again
        let events = m.update(&fist_at(0.5, 0.5), 3000.0);
        assert!(commits(&events).is_empty());
    }

    #[test]
    fn test_commit_fires_even_if_hand_lost() {
        let mut m = ready_machine();
        m.update(&fist_at(0.5, 0.5), 100.0);
        m.update(&fist_at(0.5, 0.5), 1301.0);
        assert_eq!(m.phase(), Phase::Deleting);

        // Hand disappears during the settle delay; Deleting is absorbing
        let events = m.update(&HandSample::absent(), 1702.0);
        assert_eq!(m.phase(), Phase::Deleting);
        assert_eq!(commits(&events), vec![CommitKind::Delete]);
    }

    #[test]
    fn test_drag_right_commits_sort_right() {
        let mut m = ready_machine();
        let events = m.update(&pinch_at(0.4, 0.5), 100.0);
        assert_eq!(m.phase(), Phase::Dragging);
        assert!(events.contains(&MachineEvent::Feedback(Feedback::Grab)));

        // +200px: normalized delta 0.1333 * 1000 * 1.5
        m.update(&pinch_at(0.4 + 0.2 / 1.5, 0.5), 150.0);
        assert!((m.offset().0 - 200.0).abs() < 1.0);

        let events = m.update(&open_at(0.4 + 0.2 / 1.5, 0.5), 200.0);
        assert_eq!(m.phase(), Phase::Sorting);
        assert!(events.contains(&MachineEvent::Feedback(Feedback::Drop)));
        assert!(commits(&events).is_empty());

        // Commit lands after the 300ms settle
        let events = m.update(&open_at(0.5, 0.5), 501.0);
        assert_eq!(commits(&events), vec![CommitKind::SortRight]);
    }

    #[test]
    fn test_drag_left_commits_sort_left() {
        let mut m = ready_machine();
        m.update(&pinch_at(0.6, 0.5), 100.0);
        m.update(&pinch_at(0.6 - 0.2 / 1.5, 0.5), 150.0);
        m.update(&open_at(0.6 - 0.2 / 1.5, 0.5), 200.0);
        assert_eq!(m.phase(), Phase::Sorting);
        let events = m.update(&open_at(0.5, 0.5), 501.0);
        assert_eq!(commits(&events), vec![CommitKind::SortLeft]);
    }

    #[test]
    fn test_small_drag_snaps_back() {
        let mut m = ready_machine();
        m.update(&pinch_at(0.5, 0.5), 100.0);
        // +100px, under the 150 threshold
        m.update(&pinch_at(0.5 + 0.1 / 1.5, 0.5), 150.0);
        let events = m.update(&open_at(0.5 + 0.1 / 1.5, 0.5), 200.0);
        assert_eq!(m.phase(), Phase::Idle);
        assert!(commits(&events).is_empty());
        assert_eq!(m.offset(), (0.0, 0.0));

        // And -100px the other way
        m.update(&pinch_at(0.5, 0.5), 300.0);
        m.update(&pinch_at(0.5 - 0.1 / 1.5, 0.5), 350.0);
        let events = m.update(&open_at(0.5 - 0.1 / 1.5, 0.5), 400.0);
        assert_eq!(m.phase(), Phase::Idle);
        assert!(commits(&events).is_empty());
    }

    #[test]
    fn test_vertical_drag_does_not_commit() {
        let mut m = ready_machine();
        m.update(&pinch_at(0.5, 0.2), 100.0);
        // Large vertical travel, no horizontal
        m.update(&pinch_at(0.5, 0.8), 150.0);
        let events = m.update(&open_at(0.5, 0.8), 200.0);
        assert_eq!(m.phase(), Phase::Idle);
        assert!(commits(&events).is_empty());
    }

    #[test]
    fn test_release_guard_blocks_initial_gesture() {
        let mut m = InteractionMachine::new(test_config());
        // Item activated while the committing fist is still closed
        m.update(&fist_at(0.5, 0.5), 0.0);
        assert_eq!(m.phase(), Phase::Idle);
        assert!(!m.has_released());
        m.update(&pinch_at(0.5, 0.5), 50.0);
        assert_eq!(m.phase(), Phase::Idle);

        // First open sample arms the machine; gestures work afterwards
        m.update(&open_at(0.5, 0.5), 100.0);
        assert!(m.has_released());
        m.update(&fist_at(0.5, 0.5), 150.0);
        assert_eq!(m.phase(), Phase::PreDelete);
    }

    #[test]
    fn test_hand_loss_cancels_drag() {
        let mut m = ready_machine();
        m.update(&pinch_at(0.4, 0.5), 100.0);
        m.update(&pinch_at(0.4 + 0.3 / 1.5, 0.5), 150.0);
        assert!(m.offset().0 > 150.0);

        let events = m.update(&HandSample::absent(), 200.0);
        assert_eq!(m.phase(), Phase::Idle);
        assert!(commits(&events).is_empty());
        assert_eq!(m.offset(), (0.0, 0.0));
    }

    #[test]
    fn test_hand_loss_cancels_fist_timer() {
        let mut m = ready_machine();
        m.update(&fist_at(0.5, 0.5), 100.0);
        m.update(&HandSample::absent(), 200.0);
        assert_eq!(m.phase(), Phase::Idle);

        // Fist again much later: the old start time must not count
        m.update(&fist_at(0.5, 0.5), 5000.0);
        let events = m.update(&fist_at(0.5, 0.5), 5100.0);
        assert_eq!(m.phase(), Phase::PreDelete);
        assert!(commits(&events).is_empty());
    }

    #[test]
    fn test_drag_offset_tracks_live_position() {
        let mut m = ready_machine();
        m.update(&pinch_at(0.5, 0.5), 100.0);
        m.update(&pinch_at(0.6, 0.7), 150.0);
        let (dx, dy) = m.offset();
        assert!((dx - 0.1 * 1000.0 * 1.5).abs() < 0.5);
        assert!((dy - 0.2 * 1000.0 * 1.5).abs() < 0.5);
    }
}
