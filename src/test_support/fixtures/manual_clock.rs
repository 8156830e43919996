// Manually driven clock so tests control elapsed time.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::core::ports::Clock;

pub struct ManualClock {
    now_ms: AtomicI64,
}

#[allow(dead_code)]
impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now_ms: AtomicI64::new(start_ms),
        }
    }

    pub fn advance_ms(&self, delta: i64) {
        self.now_ms.fetch_add(delta, Ordering::SeqCst);
    }

    pub fn advance_minutes(&self, minutes: i64) {
        self.advance_ms(minutes * 60_000);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}
