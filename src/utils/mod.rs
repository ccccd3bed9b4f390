//! Utility modules for the facade
//!
//! - **error**: the crate error type and `Result` alias
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{FacadeError, Result};
