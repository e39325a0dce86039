//! Core OneSky API client module

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod multipart;
pub mod request;
pub mod signer;
pub mod transport;
