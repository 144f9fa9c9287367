//! Cancellable periodic ticker.

use crossbeam_channel::{bounded, select, tick, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::trace;

/// Calls a callback once per period on a background thread until the
/// callback returns `false` or the ticker is cancelled.
///
/// Every tick is tagged with the generation the ticker was started for,
/// so a receiver can discard ticks from a ticker it has already replaced.
pub struct Ticker {
    generation: u64,
    /// Closing this channel stops the thread.
    stop: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start ticking every `period`.
    pub fn start<F>(generation: u64, period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(u64) -> bool + Send + 'static,
    {
        let (stop_tx, stop_rx) = bounded::<()>(1);

        let thread = thread::spawn(move || {
            let ticks = tick(period);
            loop {
                select! {
                    recv(stop_rx) -> _ => break,
                    recv(ticks) -> _ => {
                        if !on_tick(generation) {
                            break;
                        }
                    }
                }
            }
            trace!(generation, "ticker stopped");
        });

        Self {
            generation,
            stop: Some(stop_tx),
            thread: Some(thread),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the background thread has exited.
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Stop ticking and wait for the thread to exit. No callback runs after
    /// this returns.
    ///
    /// Must not be called while holding a lock the callback takes.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Dropping the sender disconnects the stop channel.
        self.stop.take();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;
    use std::time::Instant;

    fn wait_until(deadline: Duration, mut done: impl FnMut() -> bool) -> bool {
        let start = Instant::now();
        while start.elapsed() < deadline {
            if done() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        done()
    }

    #[test]
    fn test_ticks_carry_generation() {
        let seen = Arc::new(AtomicU64::new(0));
        let seen_in_thread = Arc::clone(&seen);

        let ticker = Ticker::start(7, Duration::from_millis(5), move |generation| {
            seen_in_thread.store(generation, Ordering::SeqCst);
            false
        });

        assert!(wait_until(Duration::from_secs(2), || ticker.is_finished()));
        assert_eq!(seen.load(Ordering::SeqCst), 7);
        assert_eq!(ticker.generation(), 7);
    }

    #[test]
    fn test_stops_when_callback_returns_false() {
        let count = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&count);

        let ticker = Ticker::start(1, Duration::from_millis(5), move |_| {
            counter.fetch_add(1, Ordering::SeqCst) + 1 < 3
        });

        assert!(wait_until(Duration::from_secs(2), || ticker.is_finished()));
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_no_ticks_after_cancel() {
        let count = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&count);

        let ticker = Ticker::start(1, Duration::from_millis(5), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });
        assert!(wait_until(Duration::from_secs(2), || count.load(Ordering::SeqCst) > 0));

        ticker.cancel();
        let after_cancel = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), after_cancel);
    }
}
