#![forbid(unsafe_code)]

//! Errors raised by theme registration and application.

use std::fmt;

use crate::validation::ThemeField;

/// Failure of a theme registry operation.
///
/// All variants are local, synchronous failures. Retrying the same call
/// yields the same error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A theme with this name is already registered.
    Duplicate { name: String },
    /// The theme is missing one or more required fields.
    Invalid {
        /// Theme name, when one was supplied.
        name: Option<String>,
        /// Every missing field, in declaration order.
        missing: Vec<ThemeField>,
    },
    /// No theme with this name is registered.
    NotFound { name: String },
    /// A theme document could not be parsed.
    Parse { message: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { name } => write!(f, "theme \"{name}\" is already registered"),
            Self::Invalid { name, missing } => {
                match name {
                    Some(name) => write!(f, "invalid theme \"{name}\": ")?,
                    None => write!(f, "invalid theme: ")?,
                }
                for (i, field) in missing.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", field.message())?;
                }
                Ok(())
            }
            Self::NotFound { name } => write!(f, "theme \"{name}\" not found"),
            Self::Parse { message } => write!(f, "failed to parse theme document: {message}"),
        }
    }
}

impl std::error::Error for ThemeError {}
