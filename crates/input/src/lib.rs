//! Terminal input module (driver-facing).
//!
//! Maps `crossterm` key events into [`crate::types::DriverAction`]. Only key
//! presses matter here; the driver ignores repeats and releases.

pub mod map;

pub use multicell_types as types;

pub use map::{map_key, should_quit};
