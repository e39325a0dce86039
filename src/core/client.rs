//! OneSky API client orchestrating signing, URL building and decoding

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::config::ClientConfig;
use crate::core::errors::{OneSkyError, Result};
use crate::core::models::{Language, LanguageListResponse};
use crate::core::multipart::{self, BOUNDARY};
use crate::core::request::{RequestBuilder, ANDROID_XML_FORMAT};
use crate::core::signer::{RequestSigner, SystemTimeProvider, TimeProvider};
use crate::core::transport::{HttpMethod, HttpRequest, HttpTransport, Transport};

/// Form field name carrying the uploaded file
const UPLOAD_FIELD_NAME: &str = "file";

/// Client for the OneSky translation-management API.
///
/// Stateless between calls: every operation derives a fresh credential stamp,
/// builds its own request and reads its own response, so concurrent use from
/// multiple tasks needs no locking.
pub struct OneSkyClient {
    request_builder: RequestBuilder,
    signer: RequestSigner,
    transport: Arc<dyn Transport>,
}

impl OneSkyClient {
    /// Create a client with the production transport and system clock
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(config.timeout_ms)?);
        Self::with_transport(config, transport, Box::new(SystemTimeProvider))
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client with an injected transport and time source.
    ///
    /// This is the seam tests use to run against an in-memory transport with
    /// a fixed clock.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        time_provider: Box<dyn TimeProvider>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            request_builder: RequestBuilder::new(&config.api_url, &config.api_key)?,
            signer: RequestSigner::new(config.api_secret, time_provider),
            transport,
        })
    }

    /// Fetch the ordered list of languages configured for a project
    pub async fn fetch_project_languages(&self, project_id: u64) -> Result<LanguageListResponse> {
        let stamp = self.signer.sign();
        let url = self
            .request_builder
            .build_url(project_id, "languages", &stamp, &[])?;

        debug!("onesky: GET {}", url.path());

        let response = self
            .transport
            .execute(HttpRequest {
                method: HttpMethod::Get,
                url,
                headers: vec![],
                body: None,
            })
            .await?;

        if !response.is_success() {
            return Err(api_error(response.status, response.body));
        }

        serde_json::from_slice(&response.body).map_err(|e| OneSkyError::InvalidResponseError {
            message: format!("malformed language list: {}", e),
        })
    }

    /// Download the translation file for one language.
    ///
    /// The download is keyed by the language's resolved locale, so a
    /// project-level `custom_locale` override takes effect here.
    pub async fn fetch_translation(
        &self,
        project_id: u64,
        source_file_name: &str,
        language: &Language,
    ) -> Result<String> {
        let stamp = self.signer.sign();
        let url = self.request_builder.build_url(
            project_id,
            "files",
            &stamp,
            &[
                ("locale", language.resolved_locale()),
                ("source_file_name", source_file_name),
            ],
        )?;

        debug!(
            "onesky: GET {} locale={}",
            url.path(),
            language.resolved_locale()
        );

        let response = self
            .transport
            .execute(HttpRequest {
                method: HttpMethod::Get,
                url,
                headers: vec![],
                body: None,
            })
            .await?;

        if !response.is_success() {
            return Err(api_error(response.status, response.body));
        }

        String::from_utf8(response.body).map_err(|e| OneSkyError::InvalidResponseError {
            message: format!("translation file is not valid UTF-8: {}", e),
        })
    }

    /// Upload a local resource file as the translation source.
    ///
    /// `deprecate_strings` asks the service to drop strings absent from the
    /// uploaded file; on the wire it is sent inverted as
    /// `is_keeping_all_strings`.
    pub async fn upload_translation(
        &self,
        project_id: u64,
        file: &Path,
        deprecate_strings: bool,
        file_name_prefix: Option<&str>,
    ) -> Result<()> {
        let file_name = file
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| OneSkyError::InvalidArgument {
                message: format!("upload path has no usable file name: {}", file.display()),
            })?;

        let content = tokio::fs::read(file).await.map_err(|e| {
            warn!("onesky: failed to read upload file {}", file.display());
            OneSkyError::FileError {
                path: file.display().to_string(),
                message: e.to_string(),
            }
        })?;

        let is_keeping_all_strings = (!deprecate_strings).to_string();
        let stamp = self.signer.sign();
        let url = self.request_builder.build_url(
            project_id,
            "files",
            &stamp,
            &[
                ("file_format", ANDROID_XML_FORMAT),
                ("is_keeping_all_strings", &is_keeping_all_strings),
            ],
        )?;

        let body = multipart::encode_file_part(UPLOAD_FIELD_NAME, file_name, file_name_prefix, &content);

        debug!("onesky: POST {} ({} bytes)", url.path(), body.len());

        let response = self
            .transport
            .execute(HttpRequest {
                method: HttpMethod::Post,
                url,
                headers: vec![(
                    "Content-Type".to_string(),
                    format!("multipart/form-data; boundary={}", BOUNDARY),
                )],
                body: Some(body),
            })
            .await?;

        if !response.is_success() {
            return Err(api_error(response.status, response.body));
        }

        Ok(())
    }
}

/// Map a non-success exchange to a typed API error carrying status and body
fn api_error(status: u16, body: Vec<u8>) -> OneSkyError {
    OneSkyError::ApiError {
        status,
        body: String::from_utf8_lossy(&body).into_owned(),
    }
}
