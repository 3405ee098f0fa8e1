//! Utility module
//!
//! - [`AppError`], [`ApiResponse`] - unified error types (from shared)
//! - [`logger`] - tracing setup

pub mod logger;

// Re-export the unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
