//! URL validation for provider endpoint overrides
//!
//! Endpoint overrides come from configuration files and environment variables,
//! so they are checked before any request is built. A valid endpoint:
//! - Parses as an absolute URL
//! - Uses the `http` or `https` scheme
//! - Has a host

use thiserror::Error;
use tracing::warn;
use url::Url;

/// Errors that can occur during URL validation
#[derive(Debug, Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),

    #[error("URL scheme must be http or https, got: {0}")]
    UnsupportedScheme(String),

    #[error("URL must have a host")]
    MissingHost,
}

/// Validate a provider endpoint override.
///
/// Plain `http` is accepted (local proxies and mock servers) but logged,
/// since provider credentials would travel unencrypted.
pub fn validate_endpoint_url(url_str: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(url_str.trim())?;

    match url.scheme() {
        "https" => {}
        "http" => {
            warn!(endpoint = %url, "Endpoint override uses plain HTTP");
        }
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}
