use thiserror::Error;

/// Failure reported by an analysis service implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service could not be reached or the connection broke mid-request.
    #[error("Network Error: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("Server Error: {status} {body}")]
    Status { status: u16, body: String },

    /// The body did not match the expected result schema.
    #[error("Unparseable response: {0}")]
    Unparseable(String),
}
