//! Injectable clock and sleep capabilities.
//!
//! The engine never reads wall-clock time or sleeps on its own; both come
//! in as replaceable dependencies so tests can simulate hours of idle time
//! without waiting for any of it.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Monotonic time source, measured in seconds.
pub trait Clock: Send {
    /// Current reading in seconds. Must never decrease for a given clock.
    fn now(&self) -> f64;
}

/// Default clock backed by [`Instant`], anchored at construction.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Future returned by a [`SleepFn`].
pub type SleepFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Replaceable async sleep primitive taking a duration in seconds.
pub type SleepFn = Arc<dyn Fn(f64) -> SleepFuture + Send + Sync>;

/// Sleep backed by the tokio timer.
pub fn tokio_sleep() -> SleepFn {
    Arc::new(|seconds| Box::pin(tokio::time::sleep(Duration::from_secs_f64(seconds))))
}

/// Test doubles for the clock and sleep capabilities.
#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures {
    use std::sync::{Arc, Mutex};

    use super::{Clock, SleepFn};

    /// Manually advanced clock for simulated time.
    #[derive(Clone)]
    pub struct ManualClock {
        seconds: Arc<Mutex<f64>>,
    }

    impl ManualClock {
        pub fn new(start: f64) -> Self {
            Self {
                seconds: Arc::new(Mutex::new(start)),
            }
        }

        /// Move the clock forward by `seconds`.
        pub fn advance(&self, seconds: f64) {
            *self.seconds.lock().unwrap() += seconds;
        }

        /// Jump the clock to an absolute reading, forwards or backwards.
        pub fn set(&self, seconds: f64) {
            *self.seconds.lock().unwrap() = seconds;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> f64 {
            *self.seconds.lock().unwrap()
        }
    }

    /// Sleep double that records requested durations and resolves at once.
    ///
    /// Returns the sleep function plus a handle to the recorded durations.
    pub fn recording_sleep() -> (SleepFn, Arc<Mutex<Vec<f64>>>) {
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let handle = Arc::clone(&recorded);
        let sleep: SleepFn = Arc::new(move |seconds| {
            handle.lock().unwrap().push(seconds);
            Box::pin(std::future::ready(()))
        });
        (sleep, recorded)
    }
}
