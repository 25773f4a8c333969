//! Environment variable overrides for message templates.
//!
//! Env values are applied after file input and before validation, so an
//! override that leaves a template blank fails validation like any other input.

use crate::schema::{ConfigError, OutcomeConfig, ValidatedOutcomeConfig};
use std::collections::BTreeMap;

/// Env var: failure message for absent optionals.
pub const ENV_MISSING_VALUE_MESSAGE: &str = "TRISTATE_MISSING_VALUE_MESSAGE";
/// Env var: failure message for unions with neither branch set.
pub const ENV_UNSET_UNION_MESSAGE: &str = "TRISTATE_UNSET_UNION_MESSAGE";
/// Env var: failure message for left union branches.
pub const ENV_LEFT_BRANCH_MESSAGE: &str = "TRISTATE_LEFT_BRANCH_MESSAGE";
/// Env var: safe-scope failure template.
pub const ENV_SAFE_SCOPE_TEMPLATE: &str = "TRISTATE_SAFE_SCOPE_TEMPLATE";

/// Parsed env overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeEnv {
    /// Override for `messages.missingValue`.
    pub missing_value: Option<String>,
    /// Override for `messages.unsetUnion`.
    pub unset_union: Option<String>,
    /// Override for `messages.leftBranch`.
    pub left_branch: Option<String>,
    /// Override for `messages.safeScope`.
    pub safe_scope: Option<String>,
}

impl OutcomeEnv {
    /// Read overrides from an explicit variable map.
    #[must_use]
    pub fn from_map(env: &BTreeMap<String, String>) -> Self {
        let read = |key: &str| env.get(key).cloned();
        Self {
            missing_value: read(ENV_MISSING_VALUE_MESSAGE),
            unset_union: read(ENV_UNSET_UNION_MESSAGE),
            left_branch: read(ENV_LEFT_BRANCH_MESSAGE),
            safe_scope: read(ENV_SAFE_SCOPE_TEMPLATE),
        }
    }

    /// Read overrides from the process environment.
    #[must_use]
    pub fn from_std_env() -> Self {
        let env = std::env::vars()
            .filter(|(key, _)| key.starts_with("TRISTATE_"))
            .collect::<BTreeMap<_, _>>();
        Self::from_map(&env)
    }

    /// Returns true when no override is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.missing_value.is_none()
            && self.unset_union.is_none()
            && self.left_branch.is_none()
            && self.safe_scope.is_none()
    }
}

/// Apply env overrides and validate the merged config.
pub fn apply_env_overrides(
    mut config: OutcomeConfig,
    env: &OutcomeEnv,
) -> Result<ValidatedOutcomeConfig, ConfigError> {
    if !env.is_empty() {
        tracing::debug!(
            missing_value = env.missing_value.is_some(),
            unset_union = env.unset_union.is_some(),
            left_branch = env.left_branch.is_some(),
            safe_scope = env.safe_scope.is_some(),
            "applying outcome config env overrides"
        );
    }

    let messages = &mut config.messages;
    for (target, value) in [
        (&mut messages.missing_value, &env.missing_value),
        (&mut messages.unset_union, &env.unset_union),
        (&mut messages.left_branch, &env.left_branch),
        (&mut messages.safe_scope, &env.safe_scope),
    ] {
        if let Some(value) = value {
            target.clone_from(value);
        }
    }

    config.validate_and_normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_templates() -> Result<(), ConfigError> {
        let env = BTreeMap::from([
            (ENV_MISSING_VALUE_MESSAGE.to_owned(), "no value".to_owned()),
            (
                ENV_SAFE_SCOPE_TEMPLATE.to_owned(),
                "caught: {error}".to_owned(),
            ),
        ]);
        let validated = apply_env_overrides(OutcomeConfig::default(), &OutcomeEnv::from_map(&env))?;

        assert_eq!(validated.messages().missing_value, "no value");
        assert_eq!(validated.messages().safe_scope, "caught: {error}");
        assert_eq!(
            validated.messages().unset_union,
            OutcomeConfig::default().messages.unset_union
        );
        Ok(())
    }

    #[test]
    fn blank_override_fails_validation() {
        let env = BTreeMap::from([(ENV_LEFT_BRANCH_MESSAGE.to_owned(), String::new())]);
        let error = apply_env_overrides(OutcomeConfig::default(), &OutcomeEnv::from_map(&env)).err();

        assert_eq!(
            error,
            Some(ConfigError::EmptyMessage {
                field: "messages.leftBranch"
            })
        );
    }

    #[test]
    fn empty_env_keeps_defaults() -> Result<(), ConfigError> {
        let env = OutcomeEnv::default();
        assert!(env.is_empty());

        let validated = apply_env_overrides(OutcomeConfig::default(), &env)?;
        assert_eq!(validated.as_ref(), &OutcomeConfig::default());
        Ok(())
    }
}
