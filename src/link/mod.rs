//! Observer link: the output channel for the reporting protocol
//!
//! The observer on the far end is stateful and redraws the robot's path from
//! the token stream, so lines must arrive in emission order. Implementations
//! flush each line before returning.

use crate::config::{LinkConfig, LinkKind};
use crate::error::{Error, Result};

mod mock;
mod serial;
mod stdio;

pub use mock::MockLink;
pub use serial::SerialLink;
pub use stdio::StdoutLink;

/// Line-oriented output channel to the drawing observer.
pub trait ObserverLink: Send {
    /// Write one newline-terminated line.
    fn write_line(&mut self, line: &str) -> Result<()>;
}

impl<T: ObserverLink + ?Sized> ObserverLink for Box<T> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }
}

/// Build the observer link selected by the configuration.
pub fn create_link(config: &LinkConfig) -> Result<Box<dyn ObserverLink>> {
    match config.kind {
        LinkKind::Stdout => {
            log::info!("Observer link: stdout");
            Ok(Box::new(StdoutLink::new()))
        }
        LinkKind::Serial => {
            if config.port.is_empty() {
                return Err(Error::InvalidParameter(
                    "serial link requires a port path".to_string(),
                ));
            }
            let link = SerialLink::open(&config.port, config.baud_rate)?;
            Ok(Box::new(link))
        }
    }
}
