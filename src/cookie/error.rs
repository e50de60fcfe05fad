//! Error types for cookie metadata mutation.

use thiserror::Error;

/// Errors that can occur while setting validated cookie attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// The supplied value is not one of the values the directive accepts.
    #[error("Invalid argument provided for {directive} directive expected one of: {expected}")]
    InvalidArgument {
        /// Cookie directive being set (e.g., `SameSite`).
        directive: &'static str,
        /// Human-readable list of accepted values.
        expected: &'static str,
        /// The rejected input, `None` when no value was supplied.
        rejected: Option<String>,
    },
}

impl MetadataError {
    /// Creates an `InvalidArgument` error for a rejected `SameSite` value.
    #[must_use]
    pub fn invalid_same_site(rejected: Option<&str>) -> Self {
        Self::InvalidArgument {
            directive: "SameSite",
            expected: "Strict, Lax or None",
            rejected: rejected.map(str::to_string),
        }
    }
}
