//! Serial observer link

use super::ObserverLink;
use crate::error::Result;
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use std::io::Write;
use std::time::Duration;

/// Serial link to the observer (UART, 8N1, no flow control).
pub struct SerialLink {
    port: Box<dyn SerialPort>,
}

impl SerialLink {
    /// Open a serial port for token emission.
    ///
    /// # Arguments
    /// * `path` - Serial port path (e.g., "/dev/ttyS1")
    /// * `baud_rate` - Baud rate (e.g., 115200)
    pub fn open(path: &str, baud_rate: u32) -> Result<Self> {
        let port = serialport::new(path, baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(Duration::from_millis(100))
            .open()?;

        log::info!("Opened observer link: {} at {} baud", path, baud_rate);

        Ok(SerialLink { port })
    }
}

impl ObserverLink for SerialLink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.port.write_all(line.as_bytes())?;
        self.port.write_all(b"\n")?;
        // The observer interprets tokens as they arrive; a buffered line is
        // a stale drawing.
        self.port.flush()?;
        Ok(())
    }
}
