//! OneSky Client - Rust client library for the OneSky translation-management API
//!
//! Authenticates requests with a timestamp/dev-hash credential stamp, lists a
//! project's configured languages, downloads translation files and uploads a
//! local resource file as the translation source.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::OneSkyClient,
    config::ClientConfig,
    errors::{OneSkyError, Result},
    models::{Language, LanguageListResponse},
    signer::{RequestSigner, SignedStamp, SystemTimeProvider, TimeProvider},
    transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, Transport},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
