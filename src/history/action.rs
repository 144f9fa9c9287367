//! Undo records.

use crate::types::{Roster, Sequence, TeamId};
use serde::{Deserialize, Serialize};

/// What is needed to reverse one mutating operation.
///
/// Each variant pairs with the event its operation appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Score { team: TeamId },

    /// `previous` is the roster before the rotation; `sequence` identifies
    /// the logged event, since lineup events share the same log.
    Rotation {
        team: TeamId,
        previous: Roster,
        sequence: Sequence,
    },

    /// `slot` is 0-based; `old_player` is who held it before.
    Substitution {
        team: TeamId,
        slot: usize,
        old_player: String,
    },

    Serve { team: TeamId },

    Timeout { team: TeamId },
}

impl Action {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Score { .. } => "score",
            Action::Rotation { .. } => "rotation",
            Action::Substitution { .. } => "substitution",
            Action::Serve { .. } => "serve",
            Action::Timeout { .. } => "timeout",
        }
    }
}
