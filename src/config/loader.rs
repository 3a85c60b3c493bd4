//! Load service config from the environment. Callers seed it from `.env` first if they want one.

use crate::config::types::{CorsOrigins, ServiceConfig, StatusProfile};
use crate::error::ConfigError;
use axum::http::HeaderValue;
use std::str::FromStr;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DB_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";
pub const BIND_ADDR: &str = "BIND_ADDR";
pub const STATUS_PROFILE: &str = "STATUS_PROFILE";
pub const ENABLE_DOCS: &str = "ENABLE_DOCS";
pub const BODY_LIMIT_BYTES: &str = "BODY_LIMIT_BYTES";
pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";

impl ServiceConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from a key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = ServiceConfig::default();

        if let Some(url) = get(DATABASE_URL) {
            config.database_url = url;
        }
        if let Some(v) = get(DB_MAX_CONNECTIONS) {
            config.max_connections = parse(DB_MAX_CONNECTIONS, &v)?;
            if config.max_connections == 0 {
                return Err(invalid(DB_MAX_CONNECTIONS, v));
            }
        }
        if let Some(v) = get(BIND_ADDR) {
            config.bind_addr = parse(BIND_ADDR, &v)?;
        }
        if let Some(v) = get(STATUS_PROFILE) {
            config.status_profile = parse_profile(&v)?;
        }
        if let Some(v) = get(ENABLE_DOCS) {
            config.enable_docs = parse_bool(ENABLE_DOCS, &v)?;
        }
        if let Some(v) = get(BODY_LIMIT_BYTES) {
            config.body_limit_bytes = parse(BODY_LIMIT_BYTES, &v)?;
        }
        if let Some(v) = get(CORS_ALLOWED_ORIGINS) {
            config.cors_allowed_origins = parse_origins(&v)?;
        }
        Ok(config)
    }
}

fn invalid(key: &'static str, value: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.into(),
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| invalid(key, value))
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn parse_profile(value: &str) -> Result<StatusProfile, ConfigError> {
    match value.to_lowercase().as_str() {
        "standard" => Ok(StatusProfile::Standard),
        "legacy" => Ok(StatusProfile::Legacy),
        _ => Err(invalid(STATUS_PROFILE, value)),
    }
}

/// `*` allows any origin, `none` disables CORS, otherwise a comma-separated list of origins.
fn parse_origins(value: &str) -> Result<CorsOrigins, ConfigError> {
    match value.to_lowercase().as_str() {
        "*" => return Ok(CorsOrigins::Any),
        "none" => return Ok(CorsOrigins::List(Vec::new())),
        _ => {}
    }
    value
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| {
            if !(o.starts_with("http://") || o.starts_with("https://")) {
                return Err(invalid(CORS_ALLOWED_ORIGINS, value));
            }
            HeaderValue::from_str(o.trim_end_matches('/')).map_err(|_| invalid(CORS_ALLOWED_ORIGINS, value))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServiceConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.database_url, "sqlite://database.db");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.status_profile, StatusProfile::Standard);
        assert!(config.enable_docs);
        assert_eq!(config.body_limit_bytes, 65536);
        assert_eq!(
            config.cors_allowed_origins,
            CorsOrigins::List(vec![HeaderValue::from_static("http://localhost:3000")])
        );
    }

    #[test]
    fn overrides_are_applied() {
        let config = from_pairs(&[
            (DATABASE_URL, "sqlite://other.db"),
            (DB_MAX_CONNECTIONS, "2"),
            (BIND_ADDR, "127.0.0.1:3000"),
            (STATUS_PROFILE, "Legacy"),
            (ENABLE_DOCS, "off"),
            (BODY_LIMIT_BYTES, "1024"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite://other.db");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.status_profile, StatusProfile::Legacy);
        assert!(!config.enable_docs);
        assert_eq!(config.body_limit_bytes, 1024);
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = from_pairs(&[(DATABASE_URL, "  "), (ENABLE_DOCS, "")]).unwrap();
        assert_eq!(config.database_url, "sqlite://database.db");
        assert!(config.enable_docs);
    }

    #[test]
    fn cors_origins_accept_lists_wildcard_and_none() {
        let config = from_pairs(&[(
            CORS_ALLOWED_ORIGINS,
            "http://localhost:3000, https://cms.example.com/",
        )])
        .unwrap();
        assert_eq!(
            config.cors_allowed_origins,
            CorsOrigins::List(vec![
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("https://cms.example.com"),
            ])
        );
        let any = from_pairs(&[(CORS_ALLOWED_ORIGINS, "*")]).unwrap();
        assert_eq!(any.cors_allowed_origins, CorsOrigins::Any);
        let none = from_pairs(&[(CORS_ALLOWED_ORIGINS, "none")]).unwrap();
        assert_eq!(none.cors_allowed_origins, CorsOrigins::List(Vec::new()));
    }

    #[rstest]
    #[case(CORS_ALLOWED_ORIGINS, "localhost:3000")]
    #[case(DB_MAX_CONNECTIONS, "0")]
    #[case(DB_MAX_CONNECTIONS, "many")]
    #[case(BIND_ADDR, "localhost")]
    #[case(STATUS_PROFILE, "v2")]
    #[case(ENABLE_DOCS, "maybe")]
    #[case(BODY_LIMIT_BYTES, "-1")]
    fn invalid_values_are_rejected(#[case] key: &'static str, #[case] value: &str) {
        match from_pairs(&[(key, value)]) {
            Err(ConfigError::Invalid { key: k, value: v }) => {
                assert_eq!(k, key);
                assert_eq!(v, value);
            }
            other => panic!("expected invalid config, got {:?}", other),
        }
    }
}
