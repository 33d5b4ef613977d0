//! Common types and utilities for the pricing engine
//!
//! This library contains shared types, utilities, and abstractions used across
//! the pricing crates of the ordering platform. It provides a unified approach
//! to error handling, exact decimal arithmetic, and domain models.

pub mod decimal;
pub mod error;
pub mod model;

/// Re-export important types
pub use decimal::*;
pub use error::{Error, ErrorExt, IntoError, Result};
