//! Cross-cutting utilities.

pub mod progress;
