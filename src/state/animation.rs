//! Cancellable repeating ticker driving animated regeneration
//!
//! While the running flag is on, the host spawns a `Ticker` whose callback
//! forces a fresh regeneration each interval. Cancellation is guaranteed on
//! both explicit toggle-off and teardown: `cancel` joins the worker, and
//! dropping a live ticker cancels it, so no tick fires against disposed
//! state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

/// A repeating background task with guaranteed cancellation
pub struct Ticker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start a ticker invoking `tick` every `interval` until cancelled
    ///
    /// The stop flag is re-checked after each sleep, so a tick never fires
    /// once `cancel` has been observed.
    pub fn spawn<F>(interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let observed = Arc::clone(&stop);

        let handle = std::thread::spawn(move || {
            while !observed.load(Ordering::Acquire) {
                std::thread::sleep(interval);
                if observed.load(Ordering::Acquire) {
                    break;
                }
                tick();
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop the ticker and wait for the worker to finish
    ///
    /// Blocks for at most one interval. After this returns, no further tick
    /// runs. Calling cancel twice is a no-op.
    pub fn cancel(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            drop(handle.join());
        }
    }

    /// Whether the ticker has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_none()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
