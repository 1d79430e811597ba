use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never got a response.
    #[error("could not reach the record service: {0}")]
    Network(#[from] reqwest::Error),

    #[error("record service rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("record not found")]
    NotFound,

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
