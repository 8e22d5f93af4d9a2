use pocket_ledger_core::auth_token::AUTH_TOKEN_ENV;

/// Default SQLite database location, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://pocket-ledger.db";

/// Server configuration loaded from environment variables.
///
/// Everything except the auth token has a default suitable for local use.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// SQLite connection string (default: [`DEFAULT_DATABASE_URL`]).
    pub database_url: String,
    /// Shared secret every `/api` request must present as a Bearer token.
    pub auth_token: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                      |
    /// |------------------------|------------------------------|
    /// | `HOST`                 | `0.0.0.0`                    |
    /// | `PORT`                 | `3000`                       |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                         |
    /// | `DATABASE_URL`         | `sqlite://pocket-ledger.db`  |
    /// | `AUTH_TOKEN`           | required                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());

        let auth_token = std::env::var(AUTH_TOKEN_ENV)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                panic!("{AUTH_TOKEN_ENV} must be set (run `generate-token` to create one)")
            });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            auth_token,
        }
    }
}
