//! Windowed suppression for log lines that can repeat on every call
//! (e.g. a storage file that keeps failing to write).

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Window {
    opened_at: Instant,
    suppressed: u64,
}

/// Per-key emission windows.
#[derive(Debug, Default)]
pub struct LogThrottle {
    windows: HashMap<String, Window>,
}

impl LogThrottle {
    /// Returns `Some(suppressed_count)` when `key` may be logged at `now`,
    /// otherwise `None` and the event is counted against the open window.
    pub fn check(&mut self, key: &str, now: Instant, interval: Duration) -> Option<u64> {
        match self.windows.get_mut(key) {
            Some(window) if now.duration_since(window.opened_at) >= interval => {
                let suppressed = window.suppressed;
                window.opened_at = now;
                window.suppressed = 0;
                Some(suppressed)
            }
            Some(window) => {
                window.suppressed += 1;
                None
            }
            None => {
                self.windows.insert(
                    key.to_string(),
                    Window {
                        opened_at: now,
                        suppressed: 0,
                    },
                );
                Some(0)
            }
        }
    }
}

static GLOBAL: OnceLock<Mutex<LogThrottle>> = OnceLock::new();

/// Process-wide [`LogThrottle::check`] against the current time.
pub fn should_emit(key: &str, interval: Duration) -> Option<u64> {
    let mut throttle = GLOBAL
        .get_or_init(|| Mutex::new(LogThrottle::default()))
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    throttle.check(key, Instant::now(), interval)
}
