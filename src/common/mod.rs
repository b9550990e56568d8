//! Common types and utilities shared across the crate.
//!
//! This module provides the unified error type, encoding helpers, and the
//! environment lookups used when stamping document metadata.

// Submodule declarations
pub mod encoding;
pub mod error;
pub mod user;

// Re-exports for convenience
pub use encoding::OutputEncoding;
pub use error::{Error, Result};
