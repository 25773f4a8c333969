//! # tristate-config
//!
//! Message templates and their loading/validation logic.
//! This crate depends on external crates only.

/// Environment variable overrides.
pub mod env;
/// Config loading helpers (file + env).
pub mod load;
/// Configuration schema types and helpers.
pub mod schema;

pub use env::{
    ENV_LEFT_BRANCH_MESSAGE, ENV_MISSING_VALUE_MESSAGE, ENV_SAFE_SCOPE_TEMPLATE,
    ENV_UNSET_UNION_MESSAGE, OutcomeEnv, apply_env_overrides,
};
pub use load::{
    load_outcome_config_from_path, load_outcome_config_std_env, parse_outcome_config_json,
    parse_outcome_config_toml, to_pretty_json, to_pretty_toml,
};
pub use schema::{
    CURRENT_CONFIG_VERSION, ConfigError, DEFAULT_LEFT_BRANCH, DEFAULT_MISSING_VALUE,
    DEFAULT_SAFE_SCOPE, DEFAULT_UNSET_UNION, ERROR_PLACEHOLDER, MessageTemplates, OutcomeConfig,
    ValidatedOutcomeConfig,
};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
