use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::matching::DEFAULT_MIN_THRESHOLD;

/// Application configuration loaded from environment variables.
/// Fails at startup if a present variable cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub min_match_threshold: u32,
    /// JSON array of postings to seed the repository with instead of the defaults.
    pub jobs_file: Option<PathBuf>,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            min_match_threshold: DEFAULT_MIN_THRESHOLD,
            jobs_file: None,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; missing keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let min_match_threshold = match lookup("MIN_MATCH_THRESHOLD") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .context("MIN_MATCH_THRESHOLD must be a non-negative integer")?,
            None => defaults.min_match_threshold,
        };
        if min_match_threshold > 100 {
            bail!("MIN_MATCH_THRESHOLD must be between 0 and 100, got {min_match_threshold}");
        }

        Ok(Config {
            port: match lookup("PORT") {
                Some(raw) => raw
                    .trim()
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            min_match_threshold,
            jobs_file: lookup("JOBS_FILE")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            request_timeout: match lookup("REQUEST_TIMEOUT_SECS") {
                Some(raw) => Duration::from_secs(
                    raw.trim()
                        .parse::<u64>()
                        .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
                ),
                None => defaults.request_timeout,
            },
        })
    }
}
