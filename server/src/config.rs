//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    Missing { var: &'static str },
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Base URL of the REST backend, without a trailing `/`.
    pub backend_url: String,
    pub port: u16,
    pub backend_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `BACKEND_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns an error when `BACKEND_URL` is missing or a numeric value does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = lookup("BACKEND_URL")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing { var: "BACKEND_URL" })?;
        if !backend_url.starts_with("http://") && !backend_url.starts_with("https://") {
            return Err(ConfigError::Invalid { var: "BACKEND_URL", value: backend_url });
        }
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let backend_timeout_secs = parse_or(&lookup, "BACKEND_TIMEOUT_SECS", DEFAULT_BACKEND_TIMEOUT_SECS)?;

        Ok(Self { backend_url, port, backend_timeout_secs })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
