use thiserror::Error;

/// Transport-level failures. A response that arrived, whatever its status,
/// is never one of these.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("connect timeout")]
    ConnectTimeout,

    #[error("request timeout")]
    RequestTimeout,

    #[error("too many redirects")]
    RedirectLoop,

    #[error("body too large ({0} bytes)")]
    BodyTooLarge(u64),

    #[error("io error: {0}")]
    Io(String),

    #[error("unknown: {0}")]
    Unknown(String),
}

impl FetchError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            if err.is_connect() {
                Self::ConnectTimeout
            } else {
                Self::RequestTimeout
            }
        } else if err.is_redirect() {
            Self::RedirectLoop
        } else if err.is_connect() || err.is_request() {
            // DNS, refused connections, TLS handshakes
            Self::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::Io(err.to_string())
        } else {
            Self::Unknown(err.to_string())
        }
    }
}
