//! Periodic timer scoped to a component.
//!
//! The loop runs as a local task on the browser event loop and re-checks a
//! shared liveness flag after every sleep, so a cancelled ticker never calls
//! back into a disposed view. Outside the browser `start` is a no-op.

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
pub struct Ticker {
    alive: Arc<AtomicBool>,
}

impl Ticker {
    /// Call `on_tick` every `interval_ms` until cancelled or dropped.
    pub fn start(interval_ms: u32, on_tick: impl Fn() + 'static) -> Self {
        let alive = Arc::new(AtomicBool::new(true));

        #[cfg(feature = "hydrate")]
        {
            let alive_task = alive.clone();
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(interval_ms))).await;
                    if !alive_task.load(Ordering::Relaxed) {
                        break;
                    }
                    on_tick();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (interval_ms, on_tick);
        }

        Self { alive }
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
