use std::num::NonZeroUsize;
use std::str::FromStr;

/// A configuration variable that is set but cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be a valid {expected}, got '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Audit bus buffer size (default: `1024`, never zero).
    pub audit_bus_capacity: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:3333` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `AUDIT_BUS_CAPACITY`   | `1024` (must be > 0)    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = parse_value("PORT", &var("PORT", "3000"), "u16")?;

        let cors_origins = var("CORS_ORIGINS", "http://localhost:3333")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs =
            parse_value("REQUEST_TIMEOUT_SECS", &var("REQUEST_TIMEOUT_SECS", "30"), "u64")?;
        let audit_bus_capacity: NonZeroUsize = parse_value(
            "AUDIT_BUS_CAPACITY",
            &var("AUDIT_BUS_CAPACITY", "1024"),
            "non-zero usize",
        )?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            audit_bus_capacity: audit_bus_capacity.get(),
        })
    }
}

fn parse_value<T: FromStr>(
    var: &'static str,
    value: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError {
        var,
        expected,
        value: value.to_string(),
    })
}
