use reqwest::StatusCode;
use thiserror::Error as ThisError;

/// Failures talking to the Schoology API. The page shows `to_string()` inline.
#[derive(Debug, ThisError)]
pub enum SchoologyError {
    #[error("Schoology domain is required")]
    MissingDomain,

    #[error("Schoology API key and secret are required")]
    MissingKeyOrSecret,

    #[error("Schoology API error {}: {body}", status.as_u16())]
    UpstreamStatus { status: StatusCode, body: String },

    #[error("HTTP request error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),
}

impl SchoologyError {
    /// Raised while building the client, before any network I/O.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            SchoologyError::MissingDomain
                | SchoologyError::MissingKeyOrSecret
                | SchoologyError::UrlError(_)
        )
    }
}
