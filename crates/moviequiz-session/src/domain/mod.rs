//! Domain layer for quiz sessions.

pub mod error;
pub mod round;
pub mod statistics;
