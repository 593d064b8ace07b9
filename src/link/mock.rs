//! Mock observer link for testing

use super::ObserverLink;
use crate::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// Recording link for unit tests.
///
/// Clones share the same line buffer, so a test can keep one handle while
/// handing another to the reporter under test.
#[derive(Clone, Default)]
pub struct MockLink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MockLink {
    /// Create a new mock link.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Drop recorded lines.
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl ObserverLink for MockLink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_buffer() {
        let observer = MockLink::new();
        let mut writer = observer.clone();

        writer.write_line("u").unwrap();
        writer.write_line("s").unwrap();

        assert_eq!(observer.lines(), vec!["u", "s"]);

        observer.clear();
        assert!(observer.lines().is_empty());
    }
}
