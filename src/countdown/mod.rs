//! Timeout countdown.
//!
//! At most one timeout counts down at a time; starting another replaces it.
//! The countdown ticks once per second and clears itself when it reaches
//! zero. It never gates other match operations.
//!
//! [`MatchState`](crate::MatchState) holds the countdown and can be ticked by
//! hand. [`LiveMatch`] drives it in real time with a cancellable [`Ticker`].
//!
//! # Example
//!
//! ```ignore
//! let live = LiveMatch::new(MatchState::new());
//! live.request_timeout(TeamId::Home);
//!
//! while let Some(active) = live.active_timeout() {
//!     println!("{} s left", active.remaining_secs);
//!     std::thread::sleep(Duration::from_millis(250));
//! }
//! ```

mod live;
mod ticker;
mod types;

pub use live::{LiveMatch, TICK_PERIOD};
pub use ticker::Ticker;
pub use types::ActiveTimeout;
