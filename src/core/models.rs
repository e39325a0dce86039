//! Data models for the OneSky API

use serde::{Deserialize, Serialize};

/// A language configured for a OneSky project.
///
/// Constructed only by decoding a list-languages response; field names match
/// the wire format of the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Service-assigned locale identifier, e.g. "pt-BR"
    pub code: String,
    /// Project-level locale override, e.g. "Hinglish LAT-IN"
    pub custom_locale: Option<String>,
    /// Display name, informational only
    pub english_name: String,
    /// Whether this is the project's source language
    pub is_base_language: bool,
    /// String-encoded percentage, e.g. "98.1%", informational only
    pub translation_progress: String,
}

impl Language {
    /// The effective locale identifier for talking to the service.
    ///
    /// A non-empty `custom_locale` wins over `code`.
    pub fn resolved_locale(&self) -> &str {
        match &self.custom_locale {
            Some(locale) if !locale.is_empty() => locale,
            _ => &self.code,
        }
    }
}

/// Response of the list-languages endpoint, order preserved as returned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageListResponse {
    /// Languages in server-returned order
    pub data: Vec<Language>,
}
