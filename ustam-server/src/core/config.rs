use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | DATABASE_PATH | ./data/ustam.db | SQLite database file |
/// | HTTP_PORT | 8000 | HTTP service port |
/// | BASE_URL | http://localhost:8000 | Public origin used in QR links |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | ADMIN_USERNAME | admin | Seeded superuser username |
/// | ADMIN_EMAIL | admin@adanaustam.com | Seeded superuser email |
/// | ADMIN_PASSWORD | (none) | Seeded superuser password, required for seeding |
///
/// JWT settings (JWT_SECRET, JWT_EXPIRATION_MINUTES, JWT_ISSUER,
/// JWT_AUDIENCE) are loaded by [`JwtConfig`].
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file path
    pub database_path: String,
    /// HTTP API service port
    pub http_port: u16,
    /// Public origin prepended to canonical table links
    pub base_url: String,
    /// JWT authentication configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Seeded superuser credentials (seeding skipped when password unset)
    pub admin_username: String,
    pub admin_email: String,
    pub admin_password: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./data/ustam.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            base_url: std::env::var("BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:8000".into()),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@adanaustam.com".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        }
    }

    /// Override selected values, commonly used in tests
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
