//! Shared types for the Adana Ustam backend
//!
//! Common types used across crates: data models, API DTOs,
//! error types, and response structures.

pub mod client;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
