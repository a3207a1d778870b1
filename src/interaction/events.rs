//! Events emitted by the interaction state machine and queue controller.
//!
//! Feedback events are fire-and-forget cues for the presentation layer
//! (sound/animation). Commit events are the irreversible outcomes that
//! remove the active item. Each variant carries a stable numeric code for
//! the flat-array JS bridge.

/// Fire-and-forget presentation cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Pinch closed on the active item (drag started).
    Grab,
    /// Fist held long enough; delete animation begins.
    Delete,
    /// Item released past the sort threshold.
    Drop,
}

impl Feedback {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Delete => "delete",
            Self::Drop => "drop",
        }
    }

    /// Stable code for the JS bridge.
    pub fn code(&self) -> u32 {
        match self {
            Self::Grab => 1,
            Self::Delete => 2,
            Self::Drop => 3,
        }
    }
}

/// Terminal outcome for the active item. Fired exactly once per item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKind {
    SortLeft,
    SortRight,
    Delete,
}

impl CommitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SortLeft => "sort-left",
            Self::SortRight => "sort-right",
            Self::Delete => "delete",
        }
    }

    /// Stable code for the JS bridge.
    pub fn code(&self) -> u32 {
        match self {
            Self::SortLeft => 10,
            Self::SortRight => 11,
            Self::Delete => 12,
        }
    }
}

/// Event emitted by one state machine update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineEvent {
    Feedback(Feedback),
    Commit(CommitKind),
}
