use std::time::Instant;

/// Monotonic elapsed-time source.
///
/// `elapsed()` returns seconds since the clock was created. Implementations must
/// never report a value lower than a previous reading.
pub trait ElapsedClock {
    fn elapsed(&self) -> f64;
}

/// Session clock backed by `Instant`.
///
/// Created once at startup and never reset.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ElapsedClock for MonotonicClock {
    #[inline]
    fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
