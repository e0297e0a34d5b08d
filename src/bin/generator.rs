use rain_sampler::generator::{self, RandomSampleSource};
use rain_sampler::sampler::AnalogSource;
use rain_sampler::sensor::SimulatedRainSensor;
use rain_sampler::sink::{SerialSink, StdoutSink};
use tracing::{info, warn};

const SERIAL_PORT: &str = "/dev/ttyUSB0";
const BAUD_RATE: u32 = 115_200;
const SENSOR_BASELINE: u16 = 400;

fn main() {
    tracing_subscriber::fmt().init();

    // One analog read seeds the generator, then the probe is done.
    let mut probe = SimulatedRainSensor::new(SENSOR_BASELINE);
    let seed_read = probe.read_channel();
    let generator = RandomSampleSource::with_seed(u64::from(seed_read));
    info!(seed = seed_read, "test data generator started");

    match SerialSink::open(SERIAL_PORT, BAUD_RATE) {
        Ok(mut sink) => {
            info!(port = SERIAL_PORT, baud = BAUD_RATE, "emitting to serial port");
            generator::run(generator, &mut sink, None);
        }
        Err(e) => {
            warn!(port = SERIAL_PORT, error = %e, "serial port unavailable, emitting to stdout");
            generator::run(generator, &mut StdoutSink, None);
        }
    }
}
