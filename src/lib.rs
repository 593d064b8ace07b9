//! DishaNav - navigation and direction-reporting core for a small ground robot
//!
//! The crate covers the two stateful pieces of the robot's navigation stack:
//!
//! - **Turn control**: closed-loop rotation by a commanded angle, polling a
//!   heading sensor until a completion strategy is satisfied, bounded by a
//!   poll/elapsed-time budget ([`motion`]).
//! - **Direction reporting**: a facing accumulator with the protocol's
//!   wrap rule, emitting single-character direction and status tokens to a
//!   drawing observer over a serial link ([`reporting`], [`link`]).
//!
//! Hardware collaborators (heading sensor, motor driver) are consumed
//! through the traits in [`drivers`]; [`devices::mock`] provides simulation
//! implementations for hardware-free runs and tests.

pub mod app;
pub mod config;
pub mod core;
pub mod devices;
pub mod drivers;
pub mod error;
pub mod link;
pub mod motion;
pub mod reporting;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{Error, Result};
