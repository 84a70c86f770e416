//! Request parameter definitions backing the admin routes.

use thiserror::Error;

pub mod destinations;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when turning raw request parameters into a query.
pub enum FormError {
    /// A numeric parameter was negative or not an integer.
    #[error("{0}")]
    InvalidParameter(String),

    /// An enumerated parameter held a value outside its allowed set.
    #[error("{0}")]
    UnrecognizedValue(String),
}
