// Ports define what the core needs from the outside world, without
// implementing it.
//
// Purpose
// - Describe the clock and the cosmetic randomness source as traits so the
//   store stays deterministic under test.
//
// Testing guidance
// - Tests pin time with a manual clock and jitter with `FixedJitter`.

use chrono::Utc;
use rand::Rng;

/// Current time in epoch milliseconds.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

/// Wall clock backed by the operating system.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Minute offset applied to projected clock-ins, always within 0..30.
pub trait JitterSource: Send + Sync {
    fn minute_offset(&self) -> u32;
}

/// Production jitter drawn from the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn minute_offset(&self) -> u32 {
        rand::thread_rng().gen_range(0..30)
    }
}

/// Deterministic jitter for tests and reproducible timelines.
#[derive(Debug)]
pub struct FixedJitter(pub u32);

impl JitterSource for FixedJitter {
    fn minute_offset(&self) -> u32 {
        self.0.min(29)
    }
}
