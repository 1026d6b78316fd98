use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every key has a default; there are no backing services to point at.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub chat_reply_delay: Duration,
    pub resume_analysis_delay: Duration,
    pub max_upload_bytes: usize,
    /// Stand-in for a real auth context until one exists.
    pub session_authenticated: bool,
}

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            chat_reply_delay: Duration::from_millis(parse_env("CHAT_REPLY_DELAY_MS", 1000)?),
            resume_analysis_delay: Duration::from_millis(parse_env(
                "RESUME_ANALYSIS_DELAY_MS",
                3000,
            )?),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            session_authenticated: parse_env("SESSION_AUTHENTICATED", false)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            chat_reply_delay: Duration::from_millis(1000),
            resume_analysis_delay: Duration::from_millis(3000),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            session_authenticated: false,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.chat_reply_delay, Duration::from_secs(1));
        assert_eq!(config.resume_analysis_delay, Duration::from_secs(3));
        assert_eq!(config.max_upload_bytes, 10_485_760);
        assert!(!config.session_authenticated);
    }

    #[test]
    fn test_parse_env_missing_key_uses_default() {
        let port: u16 = parse_env("MENTORMIND_TEST_UNSET_PORT", 9000).unwrap();
        assert_eq!(port, 9000);
    }

    #[test]
    fn test_parse_env_invalid_value_errors() {
        std::env::set_var("MENTORMIND_TEST_BAD_PORT", "not-a-port");
        let result: Result<u16> = parse_env("MENTORMIND_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
        std::env::remove_var("MENTORMIND_TEST_BAD_PORT");
    }

    #[test]
    fn test_parse_env_bool() {
        std::env::set_var("MENTORMIND_TEST_AUTH_FLAG", "true");
        let flag: bool = parse_env("MENTORMIND_TEST_AUTH_FLAG", false).unwrap();
        assert!(flag);
        std::env::remove_var("MENTORMIND_TEST_AUTH_FLAG");
    }
}
