//! Error types for the pricing engine
//!
//! This module provides a unified error handling system for the pricing
//! crates of the ordering platform. It defines standard error types that can
//! be used across crate boundaries and provides consistent error conversion.

use std::fmt::Display;
use thiserror::Error;

/// Pricing engine error type
#[derive(Debug, Error)]
pub enum Error {
    /// Error when a calculation divides by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Error when a value is not a legal monetary amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Error when a markup rule is inconsistent or malformed
    #[error("Invalid markup rule: {0}")]
    InvalidMarkupRule(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Decimal conversion error
    #[error("Decimal conversion error: {0}")]
    DecimalError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::DivisionByZero => Error::Internal(format!("{}: division by zero", context)),
                Error::InvalidAmount(msg) => Error::InvalidAmount(format!("{}: {}", context, msg)),
                Error::InvalidMarkupRule(msg) => {
                    Error::InvalidMarkupRule(format!("{}: {}", context, msg))
                }
                Error::ConfigurationError(msg) => {
                    Error::ConfigurationError(format!("{}: {}", context, msg))
                }
                Error::Internal(msg) => Error::Internal(format!("{}: {}", context, msg)),
                Error::Serialization(e) => Error::Serialization(e),
                Error::DecimalError(msg) => Error::DecimalError(format!("{}: {}", context, msg)),
            }
        })
    }
}

/// Trait for converting other error types to our Error type
pub trait IntoError {
    /// Convert to Error
    fn into_error(self, message: &str) -> Error;
}

impl<E: std::error::Error> IntoError for E {
    fn into_error(self, message: &str) -> Error {
        Error::Internal(format!("{}: {}", message, self))
    }
}

/// Convert string messages into an error
impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Internal(message)
    }
}

/// Convert static string references into an error
impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::Internal(message.to_string())
    }
}

/// From rust_decimal::Error
impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::DecimalError(err.to_string())
    }
}
