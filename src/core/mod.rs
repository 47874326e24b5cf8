//! Core types for readgen
//!
//! This module hosts the error types shared across the crate:
//! [`ReadgenError`] for strongly-typed failure cases and [`ErrorContext`] for
//! user-facing error reports with suggestions.

pub mod error;

pub use error::{ErrorContext, ReadgenError, user_friendly_error};
