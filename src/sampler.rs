use std::time::Duration;

use crate::clock::MonotonicClock;
use crate::data_structure::Sample;
use crate::sink::LineSink;

/// 50 Hz sampling cadence.
pub const SAMPLE_PERIOD_US: u32 = 20_000;

/// One-time settling pause after opening the output channel.
pub const STARTUP_DELAY: Duration = Duration::from_millis(100);

/// Banner line transmitted before the first sample.
pub const BANNER: &str = "rain sensor sampler ready";

/// The one input capability: read the analog channel once, yielding a
/// raw converter value.
pub trait AnalogSource {
    fn read_channel(&mut self) -> u16;
}

/// Fixed-period sampler that never sleeps. Emission is rate-limited;
/// polling is not, so `poll`/`tick` may be called arbitrarily more
/// often than once per period.
#[derive(Debug, Clone)]
pub struct NonBlockingSampler {
    period_us: u32,
    last_sample_us: u32,
}

impl NonBlockingSampler {
    pub fn new() -> Self {
        Self::with_period(SAMPLE_PERIOD_US)
    }

    pub fn with_period(period_us: u32) -> Self {
        Self {
            period_us,
            last_sample_us: 0,
        }
    }

    /// True exactly when a full period has elapsed since the last
    /// emission, at which point `now_us` becomes the new reference
    /// point. Wrapping subtraction keeps the comparison correct when
    /// the counter overflows, so a wrap never misses or doubles a
    /// sample.
    pub fn poll(&mut self, now_us: u32) -> bool {
        let elapsed = now_us.wrapping_sub(self.last_sample_us);
        if elapsed >= self.period_us {
            self.last_sample_us = now_us;
            true
        } else {
            false
        }
    }

    pub fn last_sample_us(&self) -> u32 {
        self.last_sample_us
    }

    /// One iteration of the loop body: when the period has elapsed,
    /// read the channel and transmit the value as one decimal line.
    /// Returns the sample on emission, `None` while idle.
    pub fn tick<S, K, C>(&mut self, source: &mut S, sink: &mut K, clock: &C) -> Option<Sample>
    where
        S: AnalogSource,
        K: LineSink,
        C: MonotonicClock,
    {
        if !self.poll(clock.now_micros()) {
            return None;
        }
        let sample = Sample::new(source.read_channel());
        sink.transmit_line(&sample.to_string());
        Some(sample)
    }
}

impl Default for NonBlockingSampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Polls forever. Yields to the runtime between iterations instead of
/// sleeping, so other tasks sharing the executor can interleave with
/// the poll loop. Read or transmit faults have no recovery path.
pub async fn run<S, K, C>(mut sampler: NonBlockingSampler, mut source: S, mut sink: K, clock: C)
where
    S: AnalogSource,
    K: LineSink,
    C: MonotonicClock,
{
    sink.transmit_line(BANNER);
    tokio::time::sleep(STARTUP_DELAY).await;

    loop {
        sampler.tick(&mut source, &mut sink, &clock);
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structure::ADC_MAX;
    use crate::sink::MemorySink;
    use std::cell::Cell;

    struct FakeClock(Cell<u32>);

    impl FakeClock {
        fn at(us: u32) -> Self {
            Self(Cell::new(us))
        }

        fn set(&self, us: u32) {
            self.0.set(us);
        }
    }

    impl MonotonicClock for FakeClock {
        fn now_micros(&self) -> u32 {
            self.0.get()
        }
    }

    struct ConstantSource(u16);

    impl AnalogSource for ConstantSource {
        fn read_channel(&mut self) -> u16 {
            self.0
        }
    }

    #[test]
    fn no_emission_until_the_period_elapses() {
        let mut sampler = NonBlockingSampler::new();

        for now in (0..20_000).step_by(1_000) {
            assert!(!sampler.poll(now), "early emission at {now} us");
        }
        assert!(sampler.poll(20_000));
        assert_eq!(sampler.last_sample_us(), 20_000);

        // the period restarts from the emission time
        assert!(!sampler.poll(21_000));
        assert!(sampler.poll(40_000));
    }

    #[test]
    fn cadence_survives_counter_wraparound() {
        let mut sampler = NonBlockingSampler::new();
        let before_wrap = u32::MAX - 5_000;

        assert!(sampler.poll(before_wrap));
        assert_eq!(sampler.last_sample_us(), before_wrap);

        // 10 ms later the counter has wrapped; still mid-period
        assert!(!sampler.poll(before_wrap.wrapping_add(10_000)));
        // exactly one period later, across the wrap boundary
        assert!(sampler.poll(before_wrap.wrapping_add(20_000)));
        assert_eq!(sampler.last_sample_us(), 14_999);
    }

    #[test]
    fn constant_input_emits_the_literal_line_once_per_period() {
        let mut sampler = NonBlockingSampler::new();
        let mut source = ConstantSource(512);
        let mut sink = MemorySink::new();
        let clock = FakeClock::at(0);

        // five periods of polling at 1 ms granularity
        for now in (0..=100_000u32).step_by(1_000) {
            clock.set(now);
            sampler.tick(&mut source, &mut sink, &clock);
        }

        assert_eq!(sink.lines.len(), 5);
        assert!(sink.lines.iter().all(|line| line == "512"));
    }

    #[test]
    fn emitted_values_stay_within_converter_range() {
        let mut sampler = NonBlockingSampler::new();
        let mut source = crate::sensor::SimulatedRainSensor::new(400);
        let mut sink = MemorySink::new();
        let clock = FakeClock::at(0);

        for period in 1..=200u32 {
            clock.set(period * SAMPLE_PERIOD_US);
            sampler.tick(&mut source, &mut sink, &clock);
        }

        assert_eq!(sink.lines.len(), 200);
        for line in &sink.lines {
            let value: u16 = line.parse().expect("line is not a decimal integer");
            assert!(value <= ADC_MAX);
        }
    }

    #[test]
    fn idle_tick_leaves_the_sink_untouched() {
        let mut sampler = NonBlockingSampler::new();
        let mut source = ConstantSource(7);
        let mut sink = MemorySink::new();
        let clock = FakeClock::at(0);

        clock.set(19_999);
        assert!(sampler.tick(&mut source, &mut sink, &clock).is_none());
        assert!(sink.lines.is_empty());
        assert_eq!(sampler.last_sample_us(), 0);
    }
}
