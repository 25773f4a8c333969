//! Config loading helpers (file + env).
//!
//! Precedence (highest wins): env overrides, file content, defaults.

use crate::env::{OutcomeEnv, apply_env_overrides};
use crate::schema::{ConfigError, OutcomeConfig, ValidatedOutcomeConfig};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    const fn label(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

/// Parse and validate a TOML config.
pub fn parse_outcome_config_toml(input: &str) -> Result<ValidatedOutcomeConfig, ConfigError> {
    parse_config_unvalidated(input, ConfigFormat::Toml)?.validate_and_normalize()
}

/// Parse and validate a JSON config.
pub fn parse_outcome_config_json(input: &str) -> Result<ValidatedOutcomeConfig, ConfigError> {
    parse_config_unvalidated(input, ConfigFormat::Json)?.validate_and_normalize()
}

/// Load the config from an optional file path, then apply env overrides.
pub fn load_outcome_config_from_path(
    config_path: Option<&Path>,
    env: &OutcomeEnv,
) -> Result<ValidatedOutcomeConfig, ConfigError> {
    let config = match config_path {
        None => OutcomeConfig::default(),
        Some(path) => {
            let format = detect_config_format(path)?;
            let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Read {
                path: path.display().to_string(),
                message: error.to_string(),
            })?;
            parse_config_unvalidated(&text, format)?
        },
    };

    // env is applied last and also validates/normalizes the resulting config.
    apply_env_overrides(config, env)
}

/// Load the config from an optional file path and the process environment.
pub fn load_outcome_config_std_env(
    config_path: Option<&Path>,
) -> Result<ValidatedOutcomeConfig, ConfigError> {
    load_outcome_config_from_path(config_path, &OutcomeEnv::from_std_env())
}

/// Serialize the config as deterministic pretty JSON (with trailing newline).
pub fn to_pretty_json(config: &OutcomeConfig) -> Result<String, ConfigError> {
    let mut output = serde_json::to_string_pretty(config).map_err(|error| ConfigError::Serialize {
        format: ConfigFormat::Json.label(),
        message: error.to_string(),
    })?;
    output.push('\n');
    Ok(output)
}

/// Serialize the config as deterministic pretty TOML (with trailing newline).
pub fn to_pretty_toml(config: &OutcomeConfig) -> Result<String, ConfigError> {
    let mut output = toml::to_string_pretty(config).map_err(|error| ConfigError::Serialize {
        format: ConfigFormat::Toml.label(),
        message: error.to_string(),
    })?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn parse_config_unvalidated(input: &str, format: ConfigFormat) -> Result<OutcomeConfig, ConfigError> {
    let parse_error = |message: String| ConfigError::Parse {
        format: format.label(),
        message,
    };
    match format {
        ConfigFormat::Json => serde_json::from_str(input).map_err(|error| parse_error(error.to_string())),
        ConfigFormat::Toml => toml::from_str(input).map_err(|error| parse_error(error.to_string())),
    }
}

fn detect_config_format(path: &Path) -> Result<ConfigFormat, ConfigError> {
    match path.extension().and_then(|extension| extension.to_str()) {
        Some(extension) if extension.eq_ignore_ascii_case("toml") => Ok(ConfigFormat::Toml),
        Some(extension) if extension.eq_ignore_ascii_case("json") => Ok(ConfigFormat::Json),
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}
