//! Convenience result type alias for Cultura.

use crate::error::AppError;

/// A specialized `Result` type for Cultura operations.
pub type AppResult<T> = Result<T, AppError>;
