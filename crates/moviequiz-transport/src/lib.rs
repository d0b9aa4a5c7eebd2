//! MovieQuiz Transport: HTTP implementation of the `NetworkClient` seam.

pub mod reqwest_client;

pub use reqwest_client::ReqwestNetworkClient;
