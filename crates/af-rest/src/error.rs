//! Error types for af-rest.

/// Result type alias for af-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for af-rest operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// The underlying af-client error, when there is one.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// HTTP status of the failed response, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Body of the failed response, if the server answered.
    pub fn body(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Api { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// Returns true if the server answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns true if the call was rejected before any request was sent.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidInput(_))
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The server answered with a status outside the success policy.
    #[error("API error: {status} {body}")]
    Api { status: u16, body: String },
    /// Arguments were rejected before any request was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Transport, decoding or configuration failure in af-client.
    #[error("Client error: {0}")]
    Client(String),
}

impl From<affinity_client::Error> for Error {
    fn from(err: affinity_client::Error) -> Self {
        let kind = match &err.kind {
            affinity_client::ErrorKind::Api { status, body } => ErrorKind::Api {
                status: *status,
                body: body.clone(),
            },
            affinity_client::ErrorKind::InvalidInput(msg) => ErrorKind::InvalidInput(msg.clone()),
            _ => ErrorKind::Client(err.to_string()),
        };
        Error {
            kind,
            source: Some(Box::new(err)),
        }
    }
}
