#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Mock expectation not met: {0}")]
    MockExpectationNotMet(String),
}
