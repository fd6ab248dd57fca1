use thiserror::Error;

/// Failures surfaced by a [`crate::Gateway`] implementation.
///
/// None of these are fatal: the engines leave their own state untouched when a
/// call fails, so a user-initiated retry re-issues the same request.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced a response (connectivity, DNS, timeout).
    #[error("request failed: {0}")]
    Http(String),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// A single-record fetch matched nothing.
    #[error("no record {id} in {collection}")]
    NotFound { collection: String, id: String },
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Http(err.to_string())
        }
    }
}
