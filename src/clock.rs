use std::time::Instant;

/// Free-running microsecond counter. Wraps at `u32::MAX` the way a
/// hardware timer register does, so elapsed time must be computed with
/// wrapping subtraction rather than an additive deadline.
pub trait MonotonicClock {
    fn now_micros(&self) -> u32;
}

/// Counter derived from process uptime, truncated to u32. The
/// truncation reproduces the ~71 minute wrap of a 32-bit microsecond
/// timer.
#[derive(Debug)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemClock {
    fn now_micros(&self) -> u32 {
        self.started.elapsed().as_micros() as u32
    }
}
