//! Device implementations
//!
//! Only simulation devices live here; real hardware drivers implement the
//! traits in [`crate::drivers`] from their own crates.

pub mod mock;
