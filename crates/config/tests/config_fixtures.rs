//! Integration tests for parsing config fixtures from the workspace testkit.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tristate_config::{
    CURRENT_CONFIG_VERSION, ConfigError, OutcomeEnv, load_outcome_config_from_path,
    parse_outcome_config_json, parse_outcome_config_toml,
};

fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest_dir.to_path_buf())
}

fn fixture_path(relative: &str) -> PathBuf {
    workspace_root()
        .join("crates")
        .join("testkit")
        .join("fixtures")
        .join(relative)
}

fn read_fixture(relative: &str) -> Result<String, Box<dyn Error>> {
    Ok(fs::read_to_string(fixture_path(relative))?)
}

#[test]
fn parses_valid_json_fixture() -> Result<(), Box<dyn Error>> {
    let contents = read_fixture("config/outcome-config.valid.json")?;
    let config = parse_outcome_config_json(&contents)?;

    assert_eq!(config.as_ref().version, CURRENT_CONFIG_VERSION);
    assert_eq!(config.messages().missing_value, "No value was supplied");
    assert_eq!(config.messages().unset_union, "Neither branch is set");
    assert_eq!(config.messages().left_branch, "Left branch selected");
    assert_eq!(
        config.messages().render_safe_scope("timeout"),
        "Operation aborted: timeout"
    );
    Ok(())
}

#[test]
fn partial_toml_fixture_keeps_defaults_and_trims() -> Result<(), Box<dyn Error>> {
    let contents = read_fixture("config/outcome-config.valid.toml")?;
    let config = parse_outcome_config_toml(&contents)?;

    assert_eq!(
        config.messages().missing_value,
        "No value was supplied",
        "template should be trimmed"
    );
    assert_eq!(
        config.messages().unset_union,
        "Union holds neither a left nor a right value"
    );
    Ok(())
}

#[test]
fn invalid_fixture_reports_error_code() -> Result<(), Box<dyn Error>> {
    let contents = read_fixture("config/outcome-config.invalid.json")?;
    let error = parse_outcome_config_json(&contents)
        .err()
        .ok_or_else(|| std::io::Error::other("expected invalid fixture error"))?;

    assert_eq!(error.code(), "config:missing_placeholder");
    assert!(matches!(
        error,
        ConfigError::MissingPlaceholder {
            field: "messages.safeScope",
            ..
        }
    ));
    Ok(())
}

#[test]
fn loads_fixture_by_extension() -> Result<(), Box<dyn Error>> {
    let path = fixture_path("config/outcome-config.valid.toml");
    let config = load_outcome_config_from_path(Some(&path), &OutcomeEnv::default())?;
    assert_eq!(config.messages().safe_scope, "Operation aborted: {error}");

    let missing = fixture_path("config/does-not-exist.json");
    let error = load_outcome_config_from_path(Some(&missing), &OutcomeEnv::default()).err();
    assert_eq!(error.map(|error| error.code()), Some("config:read"));
    Ok(())
}
