//! MovieQuiz: movie catalog.
//!
//! Responsible for the catalog item model, decoding the remote
//! `MostPopularMovies` payload, and loading it through a `NetworkClient`.

pub mod application;
pub mod domain;
