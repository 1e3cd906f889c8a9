//! Error handling for table rendering
//!
//! This module provides a unified error type and result type for rendering
//! and column operations.

use std::fmt;

/// Rendering error type
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A unit token outside the recognized set was supplied to a
    /// conversion-factor lookup
    InvalidUnit { unit: String },
    /// A length string whose numeric part could not be parsed
    InvalidLength { value: String },
    /// Column names that are not a subset of the boxhead
    UnknownColumns { columns: Vec<String> },
    /// An alignment value outside `left`, `center`, `right`
    InvalidAlignment { value: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidUnit { unit } => {
                write!(f, "Invalid units: {}", unit)
            }
            RenderError::InvalidLength { value } => {
                write!(f, "Invalid length string: '{}'", value)
            }
            RenderError::UnknownColumns { columns } => {
                write!(
                    f,
                    "All column names provided must exist in the input table. Unknown: {}",
                    columns.join(", ")
                )
            }
            RenderError::InvalidAlignment { value } => {
                write!(
                    f,
                    "Align must be one of 'left', 'center', or 'right', got '{}'",
                    value
                )
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
