//! Error handling utilities
//!
//! This module defines the crate error type and its helpers.

pub mod error;

// Re-export commonly used types
pub use error::*;
