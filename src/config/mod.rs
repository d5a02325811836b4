use std::env;

use crate::matching::DispatcherConfig;

/// Runtime configuration for the screening engine, sourced from the
/// environment (with `.env` support in development).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub max_in_flight: usize,
    pub telemetry: TelemetryConfig,
}

impl EngineConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let max_in_flight = match env::var("MATCH_MAX_IN_FLIGHT") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or(ConfigError::InvalidConcurrency { value: raw })?,
            Err(_) => DispatcherConfig::DEFAULT_MAX_IN_FLIGHT,
        };

        let log_level = env::var("MATCH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            max_in_flight,
            telemetry: TelemetryConfig { log_level },
        })
    }

    pub fn dispatcher(&self) -> DispatcherConfig {
        DispatcherConfig {
            max_in_flight: self.max_in_flight,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("MATCH_MAX_IN_FLIGHT must be a positive integer, got '{value}'")]
    InvalidConcurrency { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("MATCH_MAX_IN_FLIGHT");
        env::remove_var("MATCH_LOG_LEVEL");
    }

    #[test]
    fn load_falls_back_to_defaults() {
        let _guard = env_guard().lock().expect("env mutex poisoned");
        reset_env();

        let config = EngineConfig::load().expect("defaults load");

        assert_eq!(
            config.max_in_flight,
            DispatcherConfig::DEFAULT_MAX_IN_FLIGHT
        );
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn load_reads_overrides() {
        let _guard = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MATCH_MAX_IN_FLIGHT", "4");
        env::set_var("MATCH_LOG_LEVEL", "debug");

        let config = EngineConfig::load().expect("overrides load");

        assert_eq!(config.max_in_flight, 4);
        assert_eq!(config.telemetry.log_level, "debug");
        assert_eq!(config.dispatcher().max_in_flight, 4);
        reset_env();
    }

    #[test]
    fn load_rejects_non_positive_concurrency() {
        let _guard = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MATCH_MAX_IN_FLIGHT", "0");

        match EngineConfig::load() {
            Err(ConfigError::InvalidConcurrency { value }) => assert_eq!(value, "0"),
            other => panic!("expected invalid concurrency error, got {other:?}"),
        }
        reset_env();
    }
}
