//! A thread-based synchronization source for hosts without a display link.
//!
//! Platforms with a native vsync callback should call
//! [`GradientEngine::tick`](crate::GradientEngine::tick) from it directly.
//! Everywhere else, a [`TickDriver`] provides the same shape of signal: a
//! dedicated thread that wakes on a fixed interval, stamps the elapsed time,
//! and ticks the engine.
//!
//! The thread sleeps until the next deadline rather than sleeping for the
//! interval after each pass, so the cadence does not drift with tick cost.
//! Deadlines that were missed entirely are skipped, not replayed in a burst.

use crate::engine::GradientEngine;
use colorwash_core::EngineError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Drives a [`GradientEngine`] from a dedicated timer thread.
///
/// The thread stops and joins when [`stop`](TickDriver::stop) is called or
/// the driver is dropped.
#[derive(Debug)]
pub struct TickDriver {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl TickDriver {
    /// Spawns the driver thread, ticking `engine` every `interval`.
    ///
    /// Timestamps handed to the engine are seconds since spawn, taken from a
    /// monotonic clock.
    pub fn spawn(engine: Arc<GradientEngine>, interval: Duration) -> Result<Self, EngineError> {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("colorwash-tick".into())
            .spawn(move || {
                let epoch = Instant::now();
                let mut deadline = epoch + interval;
                while !stop_flag.load(Ordering::Relaxed) {
                    engine.tick(epoch.elapsed().as_secs_f64());
                    let now = Instant::now();
                    while deadline <= now {
                        deadline += interval;
                    }
                    thread::sleep(deadline - now);
                }
            })
            .map_err(|e| EngineError::Io(e.to_string()))?;
        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Stops the driver thread and waits for it to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.shutdown();
    }
}
