//! MovieQuiz: question generation.
//!
//! Owns the loaded catalog and turns random catalog items into yes/no
//! rating questions on background tasks, delivering every outcome to a
//! registered observer through its mailbox.

pub mod application;
pub mod domain;
