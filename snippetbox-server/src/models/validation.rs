//! Validation error types

use std::fmt;

/// Validation error for snippet input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is blank when it shouldn't be
    Blank { field: &'static str },

    /// Field exceeds maximum length in characters
    TooLong { field: &'static str, max: usize },

    /// Value is not one of the permitted choices
    NotPermitted {
        field: &'static str,
        value: String,
        allowed: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank { field } => write!(f, "{} cannot be blank", field),
            Self::TooLong { field, max } => {
                write!(f, "{} cannot be more than {} characters long", field, max)
            }
            Self::NotPermitted {
                field,
                value,
                allowed,
            } => write!(f, "{} must be one of {} (got {})", field, allowed, value),
        }
    }
}

impl std::error::Error for ValidationError {}
