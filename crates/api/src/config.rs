use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use melodex_core::audio::DEFAULT_MAX_AUDIO_BYTES;
use melodex_db::StorePaths;

/// A configuration value could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} has an invalid value '{value}': {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins from comma-separated `CORS_ORIGINS`. A single
    /// `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Where tracks, uploads and genres are stored.
    pub store: StorePaths,
    /// Largest accepted audio upload, in bytes.
    pub max_file_size: usize,
    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `HOST`                 | `0.0.0.0`                |
    /// | `PORT`                 | `8000`                   |
    /// | `CORS_ORIGINS`         | `*`                      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    /// | `DATA_DIR`             | `./data`                 |
    /// | `TRACKS_DIR`           | `$DATA_DIR/tracks`       |
    /// | `UPLOADS_DIR`          | `$DATA_DIR/uploads`      |
    /// | `GENRES_FILE`          | `$DATA_DIR/genres.json`  |
    /// | `MAX_FILE_SIZE`        | `10485760`               |
    /// | `LOG_LEVEL`            | `info`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 8000)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        for origin in cors_origins.iter().filter(|o| o.as_str() != "*") {
            if let Err(e) = origin.parse::<HeaderValue>() {
                return Err(ConfigError {
                    var: "CORS_ORIGINS",
                    value: origin.clone(),
                    reason: e.to_string(),
                });
            }
        }

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        let data_dir = PathBuf::from(lookup("DATA_DIR").unwrap_or_else(|| "./data".into()));
        let defaults = StorePaths::under(&data_dir);
        let store = StorePaths {
            tracks_dir: lookup("TRACKS_DIR").map_or(defaults.tracks_dir, PathBuf::from),
            uploads_dir: lookup("UPLOADS_DIR").map_or(defaults.uploads_dir, PathBuf::from),
            genres_file: lookup("GENRES_FILE").map_or(defaults.genres_file, PathBuf::from),
        };

        let max_file_size = parse_or(&lookup, "MAX_FILE_SIZE", DEFAULT_MAX_AUDIO_BYTES)?;
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".into());

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store,
            max_file_size,
            log_level,
        })
    }

    /// Whether CORS is open to every origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError {
                var,
                reason: e.to_string(),
                value,
            })
        }
    }
}
