//! URL and query-string composition for signed API requests

use reqwest::Url;

use crate::core::errors::{OneSkyError, Result};
use crate::core::signer::SignedStamp;

/// File format identifier sent with every upload
pub const ANDROID_XML_FORMAT: &str = "ANDROID_XML";

/// Composes fully-qualified request URLs from signed credentials plus
/// call-specific parameters
pub struct RequestBuilder {
    api_url: Url,
    api_key: String,
}

impl RequestBuilder {
    /// Create a builder rooted at the given API base URL
    pub fn new(api_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let api_url = Url::parse(api_url).map_err(|e| OneSkyError::ConfigError {
            message: format!("invalid API URL '{}': {}", api_url, e),
        })?;
        Ok(Self {
            api_url,
            api_key: api_key.into(),
        })
    }

    /// Build `{api_url}projects/{project_id}/{resource}` with the base query
    /// parameters (`api_key`, `timestamp`, `dev_hash`, in that order) followed
    /// by any call-specific extras.
    pub fn build_url(
        &self,
        project_id: u64,
        resource: &str,
        stamp: &SignedStamp,
        extra_params: &[(&str, &str)],
    ) -> Result<Url> {
        if resource.is_empty() {
            return Err(OneSkyError::InvalidArgument {
                message: "resource must not be empty".to_string(),
            });
        }
        for (name, value) in extra_params {
            if value.is_empty() {
                return Err(OneSkyError::InvalidArgument {
                    message: format!("query parameter '{}' must not be empty", name),
                });
            }
        }

        let mut url = self
            .api_url
            .join(&format!("projects/{}/{}", project_id, resource))
            .map_err(|e| OneSkyError::InvalidArgument {
                message: format!("invalid request path: {}", e),
            })?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", &self.api_key);
            query.append_pair("timestamp", &stamp.timestamp.to_string());
            query.append_pair("dev_hash", &stamp.dev_hash);
            for (name, value) in extra_params {
                query.append_pair(name, value);
            }
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp() -> SignedStamp {
        SignedStamp {
            timestamp: 12,
            dev_hash: "28dac32cc9ee8ab264d35087653be23e".to_string(),
        }
    }

    fn builder() -> RequestBuilder {
        RequestBuilder::new("https://platform.api.onesky.io/1/", "my-api-key").unwrap()
    }

    #[test]
    fn test_languages_url_has_base_params_in_order() {
        let url = builder().build_url(41994, "languages", &stamp(), &[]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://platform.api.onesky.io/1/projects/41994/languages\
             ?api_key=my-api-key&timestamp=12&dev_hash=28dac32cc9ee8ab264d35087653be23e"
        );
    }

    #[test]
    fn test_extra_params_follow_base_params() {
        let url = builder()
            .build_url(
                41994,
                "files",
                &stamp(),
                &[("locale", "fr"), ("source_file_name", "strings.xml")],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://platform.api.onesky.io/1/projects/41994/files\
             ?api_key=my-api-key&timestamp=12&dev_hash=28dac32cc9ee8ab264d35087653be23e\
             &locale=fr&source_file_name=strings.xml"
        );
    }

    #[test]
    fn test_locale_with_spaces_is_query_encoded() {
        let url = builder()
            .build_url(41994, "files", &stamp(), &[("locale", "Hinglish LAT-IN")])
            .unwrap();
        assert!(url.as_str().ends_with("&locale=Hinglish+LAT-IN"));
    }

    #[test]
    fn test_empty_resource_is_rejected() {
        let result = builder().build_url(41994, "", &stamp(), &[]);
        assert!(matches!(result, Err(OneSkyError::InvalidArgument { .. })));
    }

    #[test]
    fn test_empty_parameter_value_is_rejected() {
        let result = builder().build_url(41994, "files", &stamp(), &[("locale", "")]);
        assert!(matches!(result, Err(OneSkyError::InvalidArgument { .. })));
    }

    #[test]
    fn test_invalid_base_url_is_a_config_error() {
        let result = RequestBuilder::new("not a url", "key");
        assert!(matches!(result, Err(OneSkyError::ConfigError { .. })));
    }
}
