use thiserror::Error;

/// Failure modes of one call to the similarity service. All of them collapse
/// into the session's Failed state; nothing retries automatically.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("service responded with {status}")]
    Server { status: reqwest::StatusCode },

    #[error("malformed response: {details}")]
    MalformedResponse { details: String },

    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl BackendError {
    pub(crate) fn malformed(error: serde_json::Error) -> Self {
        BackendError::MalformedResponse {
            details: error.to_string(),
        }
    }
}

pub type Result<T, E = BackendError> = std::result::Result<T, E>;
