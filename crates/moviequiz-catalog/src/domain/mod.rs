//! Domain layer for the catalog.

pub mod items;
pub mod payload;
