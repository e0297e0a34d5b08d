use rain_sampler::clock::SystemClock;
use rain_sampler::sampler::{self, NonBlockingSampler};
use rain_sampler::sensor::SimulatedRainSensor;
use rain_sampler::sink::{SerialSink, StdoutSink};
use tracing::{info, warn};

// Output boundary, fixed at build time. There is no runtime
// configuration surface.
const SERIAL_PORT: &str = "/dev/ttyUSB0";
const BAUD_RATE: u32 = 115_200;
const SENSOR_BASELINE: u16 = 400;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let sampler = NonBlockingSampler::new();
    let source = SimulatedRainSensor::new(SENSOR_BASELINE);
    let clock = SystemClock::new();

    match SerialSink::open(SERIAL_PORT, BAUD_RATE) {
        Ok(sink) => {
            info!(port = SERIAL_PORT, baud = BAUD_RATE, "sampling to serial port");
            sampler::run(sampler, source, sink, clock).await;
        }
        Err(e) => {
            warn!(port = SERIAL_PORT, error = %e, "serial port unavailable, sampling to stdout");
            sampler::run(sampler, source, StdoutSink, clock).await;
        }
    }
}
