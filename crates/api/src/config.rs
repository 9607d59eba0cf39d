/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `90`).
    ///
    /// Must stay above `illustrator_timeout_secs` plus database headroom:
    /// illustration generation runs inside the upsert request, and the
    /// failure fallback can only save the entry if the request is still
    /// alive when the generation attempt gives up.
    pub request_timeout_secs: u64,
    /// Base URL of the illustration generation service (default: `http://localhost:8000`).
    pub illustrator_url: String,
    /// Per-request timeout for illustration generation in seconds (default: `60`).
    pub illustrator_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `90`                       |
    /// | `ILLUSTRATOR_URL`          | `http://localhost:8000`    |
    /// | `ILLUSTRATOR_TIMEOUT_SECS` | `60`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "90".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let illustrator_url =
            std::env::var("ILLUSTRATOR_URL").unwrap_or_else(|_| "http://localhost:8000".into());

        let illustrator_timeout_secs: u64 = std::env::var("ILLUSTRATOR_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("ILLUSTRATOR_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            illustrator_url,
            illustrator_timeout_secs,
        }
    }
}
