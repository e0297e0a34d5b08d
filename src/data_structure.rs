use std::fmt;

/// Full-scale reading of the 10-bit converter.
pub const ADC_MAX: u16 = 1023;

/// One raw reading from the analog channel. Produced once per sampling
/// period, serialized immediately, never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub value: u16,
}

impl Sample {
    pub fn new(value: u16) -> Self {
        Self { value }
    }

    pub fn in_range(&self) -> bool {
        self.value <= ADC_MAX
    }
}

// The wire format is the bare decimal value; the sink appends the
// line terminator.
impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_serializes_as_bare_decimal() {
        assert_eq!(Sample::new(512).to_string(), "512");
        assert_eq!(Sample::new(0).to_string(), "0");
        assert_eq!(Sample::new(1023).to_string(), "1023");
    }

    #[test]
    fn full_scale_is_in_range() {
        assert!(Sample::new(ADC_MAX).in_range());
        assert!(!Sample::new(ADC_MAX + 1).in_range());
    }
}
