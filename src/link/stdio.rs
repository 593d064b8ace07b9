//! Stdout observer link for simulation runs

use super::ObserverLink;
use crate::error::Result;
use std::io::{Stdout, Write};

/// Writes protocol lines to stdout.
///
/// Stands in for the serial observer when running against the simulated
/// chassis; piping the daemon's stdout into the observer client gives the
/// same line stream the serial link would carry.
pub struct StdoutLink {
    out: Stdout,
}

impl StdoutLink {
    /// Create a stdout link.
    pub fn new() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl Default for StdoutLink {
    fn default() -> Self {
        Self::new()
    }
}

impl ObserverLink for StdoutLink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut handle = self.out.lock();
        handle.write_all(line.as_bytes())?;
        handle.write_all(b"\n")?;
        handle.flush()?;
        Ok(())
    }
}
