//! Configuration for the disha-nav daemon
//!
//! Loads configuration from a TOML file. Defaults run the simulated chassis
//! with the token stream on stdout, which needs no hardware at all.

use crate::error::Result;
use crate::motion::TurnBudget;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub link: LinkConfig,
    pub robot: RobotConfig,
    pub turn: TurnConfig,
    pub reporting: ReportingConfig,
    pub patrol: PatrolConfig,
    pub logging: LoggingConfig,
}

/// Observer link selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Protocol lines on stdout (simulation)
    Stdout,
    /// Serial port to the observer
    Serial,
}

/// Observer link configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinkConfig {
    pub kind: LinkKind,
    /// Serial port path, used when kind = "serial"
    pub port: String,
    /// Baud rate, used when kind = "serial"
    pub baud_rate: u32,
}

/// Robot speed and geometry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RobotConfig {
    /// Base wheel speed in device units
    pub base_speed: u16,
    /// Speed multiplier, valid range 0..=4
    pub speed_multiplier: u8,
    /// Simulated heading change per sensor poll, degrees
    pub sim_degrees_per_poll: i64,
    /// Quarter-turn magnitude, degrees
    pub quarter_turn_degrees: i64,
}

impl RobotConfig {
    /// Effective wheel speed with the multiplier applied.
    pub fn drive_speed(&self) -> u16 {
        self.base_speed.saturating_mul(self.speed_multiplier as u16)
    }

    /// Update the multiplier. Values outside 0..=4 leave it unchanged.
    pub fn set_multiplier(&mut self, multiplier: u8) {
        if multiplier <= 4 {
            self.speed_multiplier = multiplier;
        }
    }
}

/// Turn loop budget configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TurnConfig {
    /// Maximum wall time per turn, milliseconds
    pub max_duration_ms: u64,
    /// Maximum sensor polls per turn
    pub max_polls: u64,
}

impl TurnConfig {
    /// Budget for the turn controller.
    pub fn budget(&self) -> TurnBudget {
        TurnBudget {
            max_duration: Duration::from_millis(self.max_duration_ms),
            max_polls: self.max_polls,
        }
    }
}

/// Reporting configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportingConfig {
    /// Pause between a point-of-interest mark and the facing re-emission,
    /// milliseconds
    pub poi_redraw_delay_ms: u64,
}

impl ReportingConfig {
    /// Redraw delay as a `Duration`.
    pub fn poi_redraw_delay(&self) -> Duration {
        Duration::from_millis(self.poi_redraw_delay_ms)
    }
}

/// One step of the patrol route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatrolStep {
    /// Drive one straight segment and re-report the current facing
    Advance,
    /// Quarter-turn counter-clockwise
    TurnLeft,
    /// Quarter-turn clockwise
    TurnRight,
    /// Mark a point of interest at the current position
    Mark,
    /// Report a halt and end the route
    Halt,
}

/// Patrol route configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PatrolConfig {
    pub route: Vec<PatrolStep>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log output (stdout, stderr, or file path)
    pub output: String,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Default configuration: simulated chassis, tokens on stdout, a square
    /// patrol with one point of interest.
    pub fn sim_defaults() -> Self {
        Self {
            link: LinkConfig {
                kind: LinkKind::Stdout,
                port: "/dev/ttyS1".to_string(),
                baud_rate: 115200,
            },
            robot: RobotConfig {
                base_speed: 100,
                speed_multiplier: 1,
                sim_degrees_per_poll: 10,
                quarter_turn_degrees: 90,
            },
            turn: TurnConfig {
                max_duration_ms: 10_000,
                max_polls: 1_000_000,
            },
            reporting: ReportingConfig {
                poi_redraw_delay_ms: 75,
            },
            patrol: PatrolConfig {
                route: vec![
                    PatrolStep::Advance,
                    PatrolStep::TurnRight,
                    PatrolStep::Advance,
                    PatrolStep::Mark,
                    PatrolStep::TurnRight,
                    PatrolStep::Advance,
                    PatrolStep::TurnRight,
                    PatrolStep::Advance,
                    PatrolStep::Halt,
                ],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                output: "stdout".to_string(),
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::sim_defaults()
    }
}
