use std::io::{self, Write};
use std::time::Duration;

/// Newline-delimited text output channel. The one output capability
/// the sampling loops consume; no framing, checksums, or flow control
/// on top.
pub trait LineSink {
    fn transmit_line(&mut self, line: &str);
}

/// Real serial port. Transmission faults inside the loop are silently
/// ignored: the channel is write-and-forget, same as the hardware loop
/// this mirrors.
pub struct SerialSink {
    port: Box<dyn serialport::SerialPort>,
}

impl SerialSink {
    pub fn open(path: &str, baud_rate: u32) -> serialport::Result<Self> {
        let port = serialport::new(path, baud_rate)
            .timeout(Duration::from_secs(1))
            .open()?;
        Ok(Self { port })
    }
}

impl LineSink for SerialSink {
    fn transmit_line(&mut self, line: &str) {
        let _ = self.port.write_all(line.as_bytes());
        let _ = self.port.write_all(b"\n");
        let _ = self.port.flush();
    }
}

/// Stdout stands in for the serial stream when no port is attached.
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn transmit_line(&mut self, line: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }
}

/// Captures emitted lines for assertions.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineSink for MemorySink {
    fn transmit_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_keeps_lines_in_order() {
        let mut sink = MemorySink::new();
        sink.transmit_line("841");
        sink.transmit_line("0");
        assert_eq!(sink.lines, vec!["841", "0"]);
    }
}
