//! Environment-driven configuration.
//!
//! The tool is configured the way a CI action is: named environment
//! variables, read once at startup. A required variable that is unset or
//! empty is fatal before any network call is made.

use std::env;

use crate::error::ConfigError;

/// Legacy repository identifiers and their renamed equivalents.
///
/// Applied to `GITHUB_REPOSITORY` before any lookup, so compare requests,
/// PR links and the report header all use the current name.
const REPOSITORY_RENAMES: &[(&str, &str)] = &[
    ("ezsystems/ezplatform-kernel", "ibexa/core"),
    ("ezsystems/ezplatform-admin-ui", "ibexa/admin-ui"),
    ("ezsystems/ezplatform-page-builder", "ibexa/page-builder"),
    ("ezsystems/ezplatform-richtext", "ibexa/fieldtype-richtext"),
    ("ezsystems/ezplatform-matrix-fieldtype", "ibexa/fieldtype-matrix"),
];

/// Resolved configuration for one changelog run.
#[derive(Debug, Clone)]
pub struct Config {
    pub current_tag: String,
    pub previous_tag: String,
    pub github_token: String,
    pub repository: String,
    pub jira_token: String,
    pub bare_output: bool,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// The repository identifier has the legacy-name remap already applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        let repository = required("GITHUB_REPOSITORY")?;

        Ok(Self {
            current_tag: required("INPUT_CURRENTTAG")?,
            previous_tag: required("INPUT_PREVIOUSTAG")?,
            github_token: required("INPUT_GITHUB_TOKEN")?,
            repository: remap_repository(&repository).to_string(),
            jira_token: required("INPUT_JIRA_TOKEN")?,
            bare_output: flag("INPUT_BARE"),
        })
    }
}

/// Translate a legacy repository identifier to its renamed equivalent.
pub fn remap_repository(name: &str) -> &str {
    REPOSITORY_RENAMES
        .iter()
        .find(|(legacy, _)| *legacy == name)
        .map_or(name, |(_, renamed)| *renamed)
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVariable(name))
}

fn flag(name: &str) -> bool {
    env::var(name)
        .map(|value| matches!(value.as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
