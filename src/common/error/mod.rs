//! Unified error types for colladoc.
//!
//! This module provides a unified error type that encompasses failures from
//! XML parsing, file I/O, schema checks, and output encoding.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result};
