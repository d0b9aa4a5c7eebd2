//! MovieQuiz terminal driver.
//!
//! Wires the real network stack to the question service and plays rounds
//! against stdin/stdout.

pub mod config;
pub mod error;
pub mod game;
pub mod wiring;
