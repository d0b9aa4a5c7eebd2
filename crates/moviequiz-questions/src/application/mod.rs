//! Application layer for questions.

pub mod observer;
pub mod service;
