//! Match reports.
//!
//! All five event logs are merged into one list sorted ascending by time.
//! Events sharing a timestamp stay in the order they were appended. The
//! report can be rendered as the on-screen history or exported as CSV with
//! columns `Time,Category,Set,Details`.

mod export;
mod merge;

pub use export::{export_filename, sanitize_filename_part, CSV_HEADER};
pub use merge::{HistoryRow, MatchReport, ReportRow};
