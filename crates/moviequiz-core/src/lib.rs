//! MovieQuiz Core: shared abstractions.
//!
//! Error taxonomy plus the network, clock, and RNG seams. Contains no
//! infrastructure code.

pub mod clock;
pub mod error;
pub mod network;
pub mod rng;
