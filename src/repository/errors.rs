use thiserror::Error;

/// Errors raised by the catalog store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// A thread panicked while holding the catalog lock.
    #[error("catalog lock poisoned")]
    LockPoisoned,
    /// Every positive `i32` has already been handed out.
    #[error("product id space exhausted")]
    IdExhausted,
    /// A value violated a domain constraint.
    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
