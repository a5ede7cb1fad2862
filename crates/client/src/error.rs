/// Errors that can occur when talking to the remote service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, connect, TLS, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("server returned {status} for {context}")]
    Status { status: u16, context: String },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The login response carried no session token header.
    #[error("login response carried no session token")]
    MissingToken,

    /// The scraped page contained no image tag.
    #[error("no image tag found in page")]
    NoImageTag,
}
