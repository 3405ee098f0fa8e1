//! Data models
//!
//! Shared between the server and the admin frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY); timestamps are unix millis.

pub mod application;
pub mod branch;
pub mod link;
pub mod message;
pub mod operator;
pub mod reservation;
pub mod table;

// Re-exports
pub use application::*;
pub use branch::*;
pub use link::*;
pub use message::*;
pub use operator::*;
pub use reservation::*;
pub use table::*;
