use thiserror::Error;

/// Application-wide error types for the Fleet API.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body failed DTO validation. Carries every message at once.
    #[error("validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),

    /// Bad credentials or an invalid/expired/malformed token.
    /// Deliberately carries no detail about which check failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Valid identity, insufficient role for the route.
    #[error("insufficient permissions")]
    Forbidden,

    /// No entity with the requested id.
    #[error("{0} not found")]
    NotFound(String),

    /// Password hashing failed.
    #[error("Hashing error: {0}")]
    HashingError(String),

    /// Token issuance failed.
    #[error("Token error: {0}")]
    TokenError(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Missing or invalid configuration.
    #[error("Config error: {0}")]
    ConfigError(String),
}
