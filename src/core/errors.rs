use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeFlowError {
    /// One or more required fields are absent or empty
    #[error("{0}")]
    MissingFields(String),

    /// A field is present but its value is not acceptable
    #[error("Invalid input for field `{0}`: {1}")]
    InvalidInput(String, String),

    /// Path segment or query string could not be decoded
    #[error("{0}")]
    InvalidRequestParameters(String),

    /// The request body could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    /// Email is already registered
    #[error("Email {0} already registered")]
    EmailAlreadyRegistered(String),

    /// No user has the given email
    #[error("No user registered with email {0}")]
    UnknownEmail(String),

    /// Email matched but the password did not
    #[error("Invalid password")]
    InvalidPassword,

    /// Missing, malformed or expired session token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated user lacks the role the operation needs
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// User with given ID not found
    #[error("User {0} not found")]
    UserNotFound(u64),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),
}

impl LifeFlowError {
    pub fn invalid(field: &str, description: impl Into<String>) -> Self {
        LifeFlowError::InvalidInput(field.to_string(), description.into())
    }
}
