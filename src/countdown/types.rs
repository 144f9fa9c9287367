//! Countdown state.

use crate::types::TeamId;
use serde::{Deserialize, Serialize};

/// The timeout currently counting down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveTimeout {
    pub team: TeamId,

    /// Whole seconds left before play resumes. Always > 0.
    pub remaining_secs: u32,

    /// Identifies which timeout request started this countdown. Ticks
    /// tagged with an older generation are ignored.
    pub generation: u64,
}

impl ActiveTimeout {
    /// Start a countdown, or `None` for a zero-length one.
    pub fn start(team: TeamId, duration_secs: u32, generation: u64) -> Option<Self> {
        (duration_secs > 0).then_some(Self {
            team,
            remaining_secs: duration_secs,
            generation,
        })
    }

    /// The countdown one second later, or `None` once it has run out.
    pub fn tick(self) -> Option<Self> {
        match self.remaining_secs {
            0 | 1 => None,
            n => Some(Self {
                remaining_secs: n - 1,
                ..self
            }),
        }
    }
}
