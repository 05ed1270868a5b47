//! # minefield-robot
//!
//! Simulates a robot crossing a bounded grid under a fixed command string,
//! checking each cell it occupies for bombs.
//!
//! A [`Robot`] parses its starting pose, then for every command character it
//! first inspects the current cell against the threat list and then rotates
//! or steps forward. Moves are clamped to the field, never wrapped. The run
//! produces three ordered logs: a human-readable trace, every pose visited,
//! and the detection results.

pub mod error;
pub mod field;
pub mod interpreter;
pub mod position;
pub mod robot;

pub use error::*;
pub use field::*;
pub use interpreter::*;
pub use position::*;
pub use robot::*;
