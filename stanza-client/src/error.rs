use crate::shape::ShapeError;

#[derive(Debug, thiserror::Error)]
pub enum StanzaError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("analysis service returned HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("response body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("malformed analysis response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error(transparent)]
    Shape(#[from] ShapeError),
}
