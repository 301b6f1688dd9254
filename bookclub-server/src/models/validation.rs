//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were absent, null, empty or zero
    MissingFields { fields: Vec<&'static str> },

    /// Body could not be decoded as the expected JSON shape
    Malformed { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { .. } => write!(f, "Missing required fields"),
            Self::Malformed { reason } => write!(f, "Invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Collects missing required fields across a whole request so a single
/// error names all of them.
///
/// # Example
/// ```
/// use bookclub_server::models::{Required, ValidationError};
///
/// let mut required = Required::default();
/// let name = required.text("name", Some("Ann".into()));
/// let owner = required.id("user_id", Some(0));
/// let err = required.finish((name, owner)).unwrap_err();
/// assert_eq!(err, ValidationError::MissingFields { fields: vec!["user_id"] });
/// ```
#[derive(Debug, Default)]
pub struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    /// Take a required string; empty strings count as missing.
    pub fn text(&mut self, field: &'static str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    /// Take a required reference id; zero counts as missing.
    pub fn id(&mut self, field: &'static str, value: Option<i64>) -> i64 {
        match value {
            Some(v) if v != 0 => v,
            _ => {
                self.missing.push(field);
                0
            }
        }
    }

    /// Return `value` if nothing was missing.
    pub fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.missing.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError::MissingFields {
                fields: self.missing,
            })
        }
    }
}
