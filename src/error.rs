//! Error types for disha-nav

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// disha-nav error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Serial port error
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parse error
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration serialize error
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Turn loop exhausted its budget before the completion strategy flipped
    #[error("Turn timed out after {elapsed_ms}ms at {heading}° (target {target}°)")]
    TurnTimeout {
        /// Commanded target angle in degrees
        target: i64,
        /// Heading at the moment the budget ran out
        heading: i64,
        /// Elapsed time when the turn was abandoned
        elapsed_ms: u64,
    },

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
