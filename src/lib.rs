pub mod clock;
pub mod data_structure;
pub mod generator;
pub mod sampler;
pub mod sensor;
pub mod sink;

pub use clock::{MonotonicClock, SystemClock};
pub use data_structure::{Sample, ADC_MAX};
