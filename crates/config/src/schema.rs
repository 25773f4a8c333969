//! Outcome configuration schema, defaults, and validation.
//!
//! - Deserialization uses `serde` (TOML or JSON).
//! - Validation is manual and returns typed `ConfigError`s.
//! - A validated config is the only form handed to outcome code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current supported configuration schema version.
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Placeholder replaced with the captured error message in safe-scope failures.
pub const ERROR_PLACEHOLDER: &str = "{error}";

/// Default failure message for an absent optional.
pub const DEFAULT_MISSING_VALUE: &str = "Value is missing";
/// Default failure message for an unset union.
pub const DEFAULT_UNSET_UNION: &str = "Union holds neither a left nor a right value";
/// Default failure message for a left union branch.
pub const DEFAULT_LEFT_BRANCH: &str = "Union holds a left value";
/// Default safe-scope failure template.
pub const DEFAULT_SAFE_SCOPE: &str = "Unhandled error: {error}";

/// Top-level outcome configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct OutcomeConfig {
    /// Schema version for forward-compatible migrations.
    pub version: u32,
    /// Library-defined failure messages.
    pub messages: MessageTemplates,
}

impl Default for OutcomeConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            messages: MessageTemplates::default(),
        }
    }
}

impl OutcomeConfig {
    /// Validate and normalize the config.
    pub fn validate_and_normalize(mut self) -> Result<ValidatedOutcomeConfig, ConfigError> {
        if self.version != CURRENT_CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: CURRENT_CONFIG_VERSION,
            });
        }

        self.messages.normalize();
        self.messages.validate()?;
        Ok(ValidatedOutcomeConfig { raw: self })
    }
}

/// Messages used when the library has to invent a failure message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct MessageTemplates {
    /// Failure message for an absent optional lifted without a message.
    pub missing_value: String,
    /// Failure message for a union with neither branch set.
    pub unset_union: String,
    /// Failure message for a left union branch lifted into a custom-error outcome.
    pub left_branch: String,
    /// Safe-scope failure template; must contain `{error}`.
    pub safe_scope: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            missing_value: DEFAULT_MISSING_VALUE.to_owned(),
            unset_union: DEFAULT_UNSET_UNION.to_owned(),
            left_branch: DEFAULT_LEFT_BRANCH.to_owned(),
            safe_scope: DEFAULT_SAFE_SCOPE.to_owned(),
        }
    }
}

impl MessageTemplates {
    /// Render the safe-scope template for a captured error message.
    #[must_use]
    pub fn render_safe_scope(&self, error_message: &str) -> String {
        self.safe_scope.replace(ERROR_PLACEHOLDER, error_message)
    }

    fn normalize(&mut self) {
        for field in [
            &mut self.missing_value,
            &mut self.unset_union,
            &mut self.left_branch,
            &mut self.safe_scope,
        ] {
            let trimmed = field.trim();
            if trimmed.len() != field.len() {
                *field = trimmed.to_owned();
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("messages.missingValue", &self.missing_value),
            ("messages.unsetUnion", &self.unset_union),
            ("messages.leftBranch", &self.left_branch),
            ("messages.safeScope", &self.safe_scope),
        ] {
            if value.is_empty() {
                return Err(ConfigError::EmptyMessage { field });
            }
        }

        if !self.safe_scope.contains(ERROR_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder {
                field: "messages.safeScope",
                placeholder: ERROR_PLACEHOLDER,
            });
        }
        Ok(())
    }
}

/// Config that passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedOutcomeConfig {
    raw: OutcomeConfig,
}

impl ValidatedOutcomeConfig {
    /// Borrow the underlying config.
    #[must_use]
    pub const fn as_ref(&self) -> &OutcomeConfig {
        &self.raw
    }

    /// Borrow the validated message templates.
    #[must_use]
    pub const fn messages(&self) -> &MessageTemplates {
        &self.raw.messages
    }

    /// Consume and return the underlying config.
    #[must_use]
    pub fn into_inner(self) -> OutcomeConfig {
        self.raw
    }
}

/// Config validation and loading failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config declares a schema version this build does not understand.
    UnsupportedVersion {
        /// Version found in the input.
        found: u32,
        /// Version supported by this build.
        supported: u32,
    },
    /// A message template is empty after trimming.
    EmptyMessage {
        /// Dotted path of the offending field.
        field: &'static str,
    },
    /// A template lacks a required placeholder.
    MissingPlaceholder {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Placeholder that must appear.
        placeholder: &'static str,
    },
    /// Input could not be parsed.
    Parse {
        /// Input format (`json` or `toml`).
        format: &'static str,
        /// Parser message.
        message: String,
    },
    /// Config file could not be read.
    Read {
        /// Path that failed to load.
        path: String,
        /// I/O message.
        message: String,
    },
    /// Config file extension is not supported.
    UnsupportedFormat {
        /// Path with the unsupported extension.
        path: String,
    },
    /// Config could not be serialized.
    Serialize {
        /// Output format (`json` or `toml`).
        format: &'static str,
        /// Serializer message.
        message: String,
    },
}

impl ConfigError {
    /// Stable error code for the failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion { .. } => "config:unsupported_version",
            Self::EmptyMessage { .. } => "config:empty_message",
            Self::MissingPlaceholder { .. } => "config:missing_placeholder",
            Self::Parse { .. } => "config:parse",
            Self::Read { .. } => "config:read",
            Self::UnsupportedFormat { .. } => "config:unsupported_format",
            Self::Serialize { .. } => "config:serialize",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { found, supported } => write!(
                formatter,
                "unsupported config version {found} (supported: {supported})"
            ),
            Self::EmptyMessage { field } => write!(formatter, "{field} must be non-empty"),
            Self::MissingPlaceholder { field, placeholder } => {
                write!(formatter, "{field} must contain {placeholder}")
            },
            Self::Parse { format, message } => write!(formatter, "invalid config {format}: {message}"),
            Self::Read { path, message } => {
                write!(formatter, "failed to read config file {path}: {message}")
            },
            Self::UnsupportedFormat { path } => {
                write!(formatter, "unsupported config file extension: {path}")
            },
            Self::Serialize { format, message } => {
                write!(formatter, "failed to serialize config {format}: {message}")
            },
        }
    }
}

impl std::error::Error for ConfigError {}
