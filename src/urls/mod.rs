//! URL canonicalization and validation.
//!
//! A submitted url is reduced to `scheme://host[:port]` before anything else
//! happens; that string is the deduplication key stored in `urls.name`.

pub mod service;

use thiserror::Error;
use url::Url;

pub use service::{SubmitOutcome, UrlDetail, UrlService, sort_checks_newest_first};

/// Longest url accepted; matches the `urls.name` column width.
pub const MAX_URL_LENGTH: usize = 255;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("url is empty")]
    Empty,

    #[error("url is {length} characters long, maximum is {max}")]
    TooLong { length: usize, max: usize },

    #[error("url is malformed")]
    Malformed,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("url has no host")]
    MissingHost,
}

/// Reduce `raw` to `scheme://host[:port]`.
///
/// Unparseable input yields empty components (`"://"` at worst) instead of
/// an error; [`validate`] rejects those values.
pub fn normalize(raw: &str) -> String {
    match Url::parse(raw.trim()) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or_default();
            match parsed.port() {
                Some(port) if !host.is_empty() => {
                    format!("{}://{}:{}", parsed.scheme(), host, port)
                }
                _ => format!("{}://{}", parsed.scheme(), host),
            }
        }
        Err(_) => "://".to_string(),
    }
}

pub fn validate(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Empty);
    }

    let length = url.chars().count();
    if length > MAX_URL_LENGTH {
        return Err(ValidationError::TooLong {
            length,
            max: MAX_URL_LENGTH,
        });
    }

    let parsed = Url::parse(url).map_err(|_| ValidationError::Malformed)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ValidationError::UnsupportedScheme(parsed.scheme().to_string()));
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ValidationError::MissingHost),
    }
}

pub fn is_valid(url: &str) -> bool {
    validate(url).is_ok()
}
