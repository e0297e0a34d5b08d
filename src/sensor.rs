use rand::Rng;

use crate::data_structure::ADC_MAX;
use crate::sampler::AnalogSource;

/// Stand-in for the moisture probe when no converter hardware is
/// attached. The reading random-walks around its starting level and is
/// clamped to the converter range, roughly how a surface wetting and
/// drying looks on the raw channel.
#[derive(Debug)]
pub struct SimulatedRainSensor {
    level: f32,
}

impl SimulatedRainSensor {
    pub fn new(baseline: u16) -> Self {
        Self {
            level: f32::from(baseline.min(ADC_MAX)),
        }
    }
}

impl AnalogSource for SimulatedRainSensor {
    fn read_channel(&mut self) -> u16 {
        let mut rng = rand::rng();
        self.level += rng.random_range(-8.0..8.0);
        self.level = self.level.clamp(0.0, f32::from(ADC_MAX));
        self.level as u16
    }
}
