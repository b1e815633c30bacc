//! Error types for risk decisioning

use thiserror::Error;

/// Score provider error
///
/// Every failure a decision can produce originates at the provider; the
/// policy itself raises nothing and passes these through unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// Provider did not answer within its deadline
    #[error("Score provider timed out: {0}")]
    Timeout(String),

    /// Provider could not be reached
    #[error("Score provider unreachable: {0}")]
    Connection(String),

    /// Any other provider-side fault
    #[error("Score provider error: {0}")]
    Provider(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
