//! Application layer for the catalog.

pub mod loader;
