//! Domain layer for questions.

pub mod question;
