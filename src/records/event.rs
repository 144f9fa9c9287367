//! Logged match events.

use crate::types::{Roster, Sequence, TeamId, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which log an event lives in (and its report category).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Score,
    Rotation,
    Substitution,
    Serving,
    Timeout,
}

impl EventCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            EventCategory::Score => "Score",
            EventCategory::Rotation => "Rotation",
            EventCategory::Substitution => "Substitution",
            EventCategory::Serving => "Serving",
            EventCategory::Timeout => "Timeout",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific payload of an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// A point was added; `score` is the team's score after it.
    Score { team: TeamId, score: u32 },

    /// Roster snapshot after a rotation (or the starting lineup).
    Rotation { team: TeamId, roster: Roster },

    /// `position` is 1-based.
    Substitution {
        team: TeamId,
        old_player: String,
        new_player: String,
        position: usize,
    },

    Serve { team: TeamId, player: String },

    /// `duration_secs` is the countdown length in effect when it was taken.
    Timeout { team: TeamId, duration_secs: u32 },
}

impl EventKind {
    pub fn team(&self) -> TeamId {
        match self {
            EventKind::Score { team, .. }
            | EventKind::Rotation { team, .. }
            | EventKind::Substitution { team, .. }
            | EventKind::Serve { team, .. }
            | EventKind::Timeout { team, .. } => *team,
        }
    }

    pub fn category(&self) -> EventCategory {
        match self {
            EventKind::Score { .. } => EventCategory::Score,
            EventKind::Rotation { .. } => EventCategory::Rotation,
            EventKind::Substitution { .. } => EventCategory::Substitution,
            EventKind::Serve { .. } => EventCategory::Serving,
            EventKind::Timeout { .. } => EventCategory::Timeout,
        }
    }
}

/// A single immutable log entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Append position across all logs (assigned by the log).
    pub sequence: Sequence,

    /// When the event was recorded.
    pub timestamp: Timestamp,

    /// Set label in effect when the event was recorded.
    pub set: String,

    pub kind: EventKind,
}

impl Event {
    pub fn team(&self) -> TeamId {
        self.kind.team()
    }

    pub fn category(&self) -> EventCategory {
        self.kind.category()
    }
}
