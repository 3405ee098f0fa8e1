//! Adana Ustam Backend
//!
//! Per-table QR link resolution and back-office management for the
//! restaurant chain's branches.
//!
//! # Module structure
//!
//! ```text
//! ustam-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── auth/          # JWT auth, password hashing, branch scoping
//! ├── links/         # Link type catalog and resolution
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool, migrations, repositories
//! └── utils/         # Logging and re-exported error types
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod links;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro with tracing format specifiers
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load .env and initialize logging
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // Missing .env is fine, env vars may come from the process environment
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   __  __     __
  / / / /____/ /_____ _____ ___
 / / / / ___/ __/ __ `/ __ `__ \
/ /_/ (__  ) /_/ /_/ / / / / / /
\____/____/\__/\__,_/_/ /_/ /_/
    "#
    );
}
