//! # Emit Errors
//!
//! Error types for header emission.

use std::fmt;

use thiserror::Error;

/// Errors that can occur while rendering a header.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Writing to the output buffer failed
    #[error("Formatting failed: {0}")]
    Format(#[from] fmt::Error),

    /// A value has no C++ literal form
    #[error("Non-finite value {value} at {array}[{index}]")]
    NonFiniteValue {
        array: String,
        index: usize,
        value: f32,
    },

    /// A symbol name is not a valid C++ identifier
    #[error("Invalid identifier: '{name}'")]
    InvalidIdentifier { name: String },
}

impl EmitError {
    /// Creates an invalid identifier error.
    pub fn invalid_identifier(name: impl Into<String>) -> Self {
        Self::InvalidIdentifier { name: name.into() }
    }
}
