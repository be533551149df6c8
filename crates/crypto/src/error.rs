//! Error types for the crypto crate.

use thiserror::Error;

/// Result type alias for crypto operations.
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Errors that can occur during crypto operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Input is not Base64 text
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A required credential is missing
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Endpoint cannot be signed
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}
