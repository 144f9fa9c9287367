//! # Scorebook
//!
//! An in-memory scoresheet for a volleyball match, kept by a human operator.
//!
//! ## Core Concepts
//!
//! - **Match state**: Two teams with names, six-slot rosters, scores and
//!   timeouts left, plus the current set label
//! - **Event logs**: Append-only logs of scores, rotations, substitutions,
//!   serves and timeouts
//! - **Undo**: One undo record per logged operation, popped in LIFO order.
//!   Starting the match is permanent
//! - **Countdown**: A single timeout countdown that clears itself
//! - **Reports**: All logs merged by time and exported as CSV
//!
//! No volleyball rules are enforced. Invalid operations are silently
//! ignored rather than reported as errors.
//!
//! ## Example
//!
//! ```ignore
//! use scorebook::{MatchState, TeamId};
//!
//! let mut state = MatchState::new();
//! state.rename_team(TeamId::Home, "Sharks");
//! state.start_match();
//!
//! state.serve(TeamId::Home, "Ana");
//! state.record_point(TeamId::Home);
//! state.undo();
//!
//! let report = state.report();
//! let csv = report.to_csv()?;
//! std::fs::write(report.filename(), csv)?;
//! ```

pub mod clock;
pub mod countdown;
pub mod error;
pub mod history;
pub mod match_state;
pub mod records;
pub mod report;
pub mod types;

// Re-exports
pub use clock::{Clock, ManualClock, SystemClock};
pub use countdown::{ActiveTimeout, LiveMatch, Ticker, TICK_PERIOD};
pub use error::{Result, ScorebookError};
pub use history::{Action, ActionHistory};
pub use match_state::{MatchConfig, MatchSnapshot, MatchState};
pub use records::{Event, EventCategory, EventKind, EventLog};
pub use report::{
    export_filename, sanitize_filename_part, HistoryRow, MatchReport, ReportRow, CSV_HEADER,
};
pub use types::*;
