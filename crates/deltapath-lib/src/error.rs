use thiserror::Error;

/// Convenient result alias for the deltapath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Exhausting the search without reaching the target is not an error;
/// [`find_path`](crate::find_path) reports it as `Ok(None)`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Raised when the operation set contains no operations.
    #[error("operation set is empty; at least one non-zero operation is required")]
    EmptyOptions,

    /// Raised when the operation set contains a zero-valued operation,
    /// which would never change the current value and breaks the step
    /// ceiling derivation.
    #[error("operation set contains a zero-valued operation")]
    ZeroOption,
}
