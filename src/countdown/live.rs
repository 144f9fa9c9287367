//! Shared match handle with a real-time timeout countdown.

use super::ticker::Ticker;
use super::types::ActiveTimeout;
use crate::match_state::{MatchSnapshot, MatchState};
use crate::types::TeamId;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// Default countdown tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A [`MatchState`] whose timeout countdown runs by itself.
///
/// Ticks are applied under the same lock as every other operation, and a
/// new timeout cancels the previous ticker before starting its own.
///
/// Lock order is always ticker slot, then state.
#[derive(Clone)]
pub struct LiveMatch {
    state: Arc<Mutex<MatchState>>,
    ticker: Arc<Mutex<Option<Ticker>>>,
    tick_period: Duration,
}

fn stop(ticker: Ticker) {
    if ticker.is_finished() {
        trace!(generation = ticker.generation(), "previous countdown already finished");
    } else {
        debug!(generation = ticker.generation(), "cancelling previous countdown");
    }
    ticker.cancel();
}

impl LiveMatch {
    pub fn new(state: MatchState) -> Self {
        Self::with_tick_period(state, TICK_PERIOD)
    }

    /// Use a custom tick period (mainly for tests).
    pub fn with_tick_period(state: MatchState, tick_period: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            ticker: Arc::new(Mutex::new(None)),
            tick_period,
        }
    }

    /// Read the state.
    pub fn read<R>(&self, f: impl FnOnce(&MatchState) -> R) -> R {
        f(&self.state.lock())
    }

    /// Run any state operation. Use [`request_timeout`](Self::request_timeout)
    /// and [`reset`](Self::reset) instead of their `MatchState` versions so the
    /// ticker follows along.
    pub fn update<R>(&self, f: impl FnOnce(&mut MatchState) -> R) -> R {
        f(&mut self.state.lock())
    }

    /// Spend a timeout and (re)start the countdown ticker.
    pub fn request_timeout(&self, team: TeamId) -> bool {
        let mut slot = self.ticker.lock();

        let generation = {
            let mut state = self.state.lock();
            if !state.request_timeout(team) {
                return false;
            }
            state.active_timeout().map(|active| active.generation)
        };

        if let Some(previous) = slot.take() {
            stop(previous);
        }

        if let Some(generation) = generation {
            let state = Arc::clone(&self.state);
            *slot = Some(Ticker::start(generation, self.tick_period, move |generation| {
                let mut state = state.lock();
                state.tick_timeout_generation(generation) && state.active_timeout().is_some()
            }));
        }
        true
    }

    /// Stop any countdown and reset the match.
    pub fn reset(&self) {
        let mut slot = self.ticker.lock();
        if let Some(previous) = slot.take() {
            stop(previous);
        }
        self.state.lock().reset();
    }

    /// Whether a countdown ticker thread is still running.
    pub fn is_counting_down(&self) -> bool {
        self.ticker
            .lock()
            .as_ref()
            .is_some_and(|ticker| !ticker.is_finished())
    }

    pub fn active_timeout(&self) -> Option<ActiveTimeout> {
        self.state.lock().active_timeout()
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        self.state.lock().snapshot()
    }
}
