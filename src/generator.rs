use std::thread::sleep;
use std::time::Duration;

use crate::sampler::AnalogSource;
use crate::sink::LineSink;

/// Cadence of the blocking loop, same 50 Hz as the real sampler.
pub const GENERATOR_PERIOD: Duration = Duration::from_millis(20);

/// Exclusive upper bound of generated values.
pub const VALUE_RANGE: u16 = 1024;

/// Pseudo-random stand-in for the rain sensor, for exercising
/// downstream consumers without hardware. Seeded once at startup; the
/// statistical quality of the stream is intentionally loose.
#[derive(Debug, Clone)]
pub struct RandomSampleSource {
    rng: fastrand::Rng,
}

impl RandomSampleSource {
    /// Seeds from a single analog read. Good enough as an entropy
    /// source for test data, nothing more.
    pub fn from_analog<S: AnalogSource>(source: &mut S) -> Self {
        Self::with_seed(u64::from(source.read_channel()))
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn next_value(&mut self) -> u16 {
        self.rng.u16(..VALUE_RANGE)
    }
}

impl AnalogSource for RandomSampleSource {
    fn read_channel(&mut self) -> u16 {
        self.next_value()
    }
}

/// Blocking emission loop: transmit one value, halt for the full
/// period, repeat. Nothing else can interleave during the halt, which
/// is fine here because the generator has no other work. `cycles`
/// bounds the run for tests; `None` runs until the process dies.
pub fn run<K: LineSink>(mut generator: RandomSampleSource, sink: &mut K, cycles: Option<u64>) {
    let mut emitted = 0u64;
    loop {
        if let Some(max) = cycles {
            if emitted >= max {
                break;
            }
        }
        sink.transmit_line(&generator.next_value().to_string());
        emitted += 1;
        sleep(GENERATOR_PERIOD);
    }
}
