//! Shared test doubles and utilities for the MovieQuiz engine.

mod clock;
mod network;
mod rng;

pub use clock::FixedClock;
pub use network::{FailingNetworkClient, StubNetworkClient, StubResponse};
pub use rng::{MockRng, SequenceRng};
