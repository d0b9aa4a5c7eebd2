//! MovieQuiz: quiz session.
//!
//! Tracks the answers of one round and folds finished rounds into running
//! statistics through an injected sink.

pub mod domain;
