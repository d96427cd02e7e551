use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::server::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub model_dir: PathBuf,
    pub bind_addr: String,
    pub inference_timeout: Duration,
    pub max_sequence_length: usize,
    pub analysis_workers: usize,
}

impl Config {
    const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0:8080";
    const DEFAULT_INFERENCE_TIMEOUT_SECS: u64 = 10;
    const DEFAULT_MAX_SEQUENCE_LENGTH: usize = 128;
    const DEFAULT_ANALYSIS_WORKERS: usize = 4;

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let inference_timeout_secs: u64 = parse_or(
            &lookup,
            "INFERENCE_TIMEOUT_SECS",
            Self::DEFAULT_INFERENCE_TIMEOUT_SECS,
        )?;
        let max_sequence_length: usize = parse_or(
            &lookup,
            "MAX_SEQUENCE_LENGTH",
            Self::DEFAULT_MAX_SEQUENCE_LENGTH,
        )?;
        let analysis_workers: usize =
            parse_or(&lookup, "ANALYSIS_WORKERS", Self::DEFAULT_ANALYSIS_WORKERS)?;

        if inference_timeout_secs == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "INFERENCE_TIMEOUT_SECS".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        if max_sequence_length == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "MAX_SEQUENCE_LENGTH".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        if analysis_workers == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "ANALYSIS_WORKERS".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            model_dir: PathBuf::from(required("MODEL_DIR")?),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| Self::DEFAULT_BIND_ADDR.to_string()),
            inference_timeout: Duration::from_secs(inference_timeout_secs),
            max_sequence_length,
            analysis_workers,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
    }
}
