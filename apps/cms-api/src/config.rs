//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// How record identifiers are minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    Uuid,
    Sequential,
}

impl IdStrategy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "uuid" => Some(IdStrategy::Uuid),
            "sequential" => Some(IdStrategy::Sequential),
            _ => None,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Delay awaited before each submission is processed.
    pub submit_latency: Duration,
    /// Largest accepted JSON body, in bytes.
    pub max_body_bytes: usize,
    pub id_strategy: IdStrategy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            submit_latency: Duration::from_millis(1000),
            max_body_bytes: 256 * 1024,
            id_strategy: IdStrategy::Uuid,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset or
    /// unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            submit_latency: lookup("SUBMIT_LATENCY_MS")
                .and_then(|ms| ms.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.submit_latency),
            max_body_bytes: lookup("MAX_BODY_BYTES")
                .and_then(|b| b.parse().ok())
                .unwrap_or(defaults.max_body_bytes),
            id_strategy: lookup("ID_STRATEGY")
                .as_deref()
                .and_then(IdStrategy::parse)
                .unwrap_or(defaults.id_strategy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.submit_latency, Duration::from_millis(1000));
        assert_eq!(config.max_body_bytes, 262_144);
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("SUBMIT_LATENCY_MS", "0"),
            ("MAX_BODY_BYTES", "1024"),
            ("ID_STRATEGY", "Sequential"),
        ]));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.submit_latency, Duration::ZERO);
        assert_eq!(config.max_body_bytes, 1024);
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
    }

    #[test]
    fn unparsable_values_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "eighty"),
            ("SUBMIT_LATENCY_MS", "-5"),
            ("ID_STRATEGY", "snowflake"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.submit_latency, Duration::from_millis(1000));
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
    }
}
