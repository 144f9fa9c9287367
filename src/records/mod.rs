//! Event records.
//!
//! Match events are appended to per-category logs. Entries are never edited;
//! only undo removes the newest entry of a log.

mod event;
mod log;

pub use event::{Event, EventCategory, EventKind};
pub use log::EventLog;
