//! # tristate
//!
//! Facade API for consumers.
//! This crate depends on `core`, `safe`, `config`, and `shared`.
//!
//! ```
//! use tristate::{Either, Outcome, ValueOutcome};
//!
//! # fn main() -> Result<(), tristate::ContractError> {
//! let nested = ValueOutcome::warning(ValueOutcome::<i32>::fail("inner")?, "outer")?;
//! assert_eq!(nested.flatten().message(), Some("inner\nResulting in: outer"));
//!
//! let lifted = ValueOutcome::<i32>::from_either(Either::<String, i32>::Neither);
//! assert!(lifted.is_failure());
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

pub use tristate_config::{
    ConfigError, MessageTemplates, OutcomeConfig, OutcomeEnv, ValidatedOutcomeConfig,
    load_outcome_config_from_path, parse_outcome_config_json, parse_outcome_config_toml,
};
pub use tristate_core::{
    Category, CustomOutcome, Detail, FailureReport, FromSource, Lazy, Literal, Message, Outcome,
    OutcomeState, Produce, RESULTING_IN, TypedState, UnitOutcome, ValueCustomOutcome,
    ValueOutcome, WarningPolicy, from_source, lazy, literal,
};
pub use tristate_safe::{
    PanicError, SafeScope, safe_custom_outcome, safe_outcome, safe_value_custom_outcome,
    safe_value_outcome,
};
pub use tristate_shared::{
    ContractError, ContractErrorKind, Either, EqualityMode, ErrorCode, Exception, ExceptionRecord,
};

/// Returns the facade crate version.
#[must_use]
pub const fn facade_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Load the effective config from an optional file and explicit env values.
pub fn load_effective_config(
    env: &BTreeMap<String, String>,
    config_path: Option<&Path>,
) -> Result<ValidatedOutcomeConfig, ConfigError> {
    load_outcome_config_from_path(config_path, &OutcomeEnv::from_map(env))
}

/// Load the effective config, returning deterministic pretty JSON.
pub fn load_effective_config_json(
    env: &BTreeMap<String, String>,
    config_path: Option<&Path>,
) -> Result<String, ConfigError> {
    let config = load_effective_config(env, config_path)?;
    tristate_config::to_pretty_json(config.as_ref())
}

/// Build a safe scope from the effective config.
pub fn load_safe_scope(
    env: &BTreeMap<String, String>,
    config_path: Option<&Path>,
) -> Result<SafeScope, ConfigError> {
    Ok(SafeScope::new(&load_effective_config(env, config_path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;
    use tristate_config::ENV_SAFE_SCOPE_TEMPLATE;

    #[test]
    fn facade_crate_compiles() {
        assert!(!facade_crate_version().is_empty());
    }

    #[test]
    fn effective_config_json_is_deterministic() -> Result<(), Box<dyn Error>> {
        let env = BTreeMap::new();
        let first = load_effective_config_json(&env, None)?;
        let second = load_effective_config_json(&env, None)?;

        assert_eq!(first, second);
        assert!(first.contains("\"missingValue\": \"Value is missing\""));
        Ok(())
    }

    #[test]
    fn safe_scope_follows_env() -> Result<(), Box<dyn Error>> {
        let env = BTreeMap::from([(
            ENV_SAFE_SCOPE_TEMPLATE.to_owned(),
            "failed: {error}".to_owned(),
        )]);
        let scope = load_safe_scope(&env, None)?;

        let outcome = scope.outcome(|| Err(io::Error::other("denied")));
        assert_eq!(outcome.message(), Some("failed: denied"));
        Ok(())
    }
}
