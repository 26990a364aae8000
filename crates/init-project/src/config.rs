use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize as _;
use serde::Deserialize;
use toml::Value as TomlValue;

use crate::project::ProjectOptions;
use crate::utils::error_messages;

/// Known top-level config keys.
const KNOWN_KEYS: &[&str] = &["path", "git", "npm", "commit_message"];

const APP_PREFIX: &str = "init-project";
const CONFIG_FILE: &str = "config.toml";

// Embed repository defaults
const DEFAULT_TOML: &str = include_str!(concat!(
  env!("CARGO_MANIFEST_DIR"),
  "/defaults/init-project.toml"
));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectConfig {
  pub path: PathBuf,
  pub git: bool,
  pub npm: bool,
  pub commit_message: String,
}

/// Values given on the command line. `None` falls back to the config.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
  pub path: Option<PathBuf>,
  pub no_git: bool,
  pub no_npm: bool,
}

impl ProjectConfig {
  /// Combine config values with command line overrides.
  #[must_use]
  pub fn options(&self, overrides: &Overrides) -> ProjectOptions {
    ProjectOptions {
      path: overrides.path.clone().unwrap_or_else(|| self.path.clone()),
      git: self.git && !overrides.no_git,
      npm: self.npm && !overrides.no_npm,
      commit_message: self.commit_message.clone(),
    }
  }
}

/// Load the embedded defaults merged with the global config
/// (`$XDG_CONFIG_HOME/init-project/config.toml`), if present.
///
/// # Errors
/// Returns an error if the global config cannot be read or is not valid TOML.
pub fn load_config() -> Result<ProjectConfig> {
  let xdg = xdg::BaseDirectories::with_prefix(APP_PREFIX);
  load_config_from(xdg.find_config_file(CONFIG_FILE).as_deref())
}

/// Load the embedded defaults merged with the config at `global`.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid TOML or holds
/// values of the wrong type.
pub fn load_config_from(global: Option<&Path>) -> Result<ProjectConfig> {
  let mut merged: TomlValue =
    toml::from_str(DEFAULT_TOML).context("invalid embedded default config")?;

  if let Some(global_path) = global {
    log::debug!("loading config from {}", global_path.display());
    let data = fs::read_to_string(global_path)
      .with_context(|| format!("failed to read {}", global_path.display()))?;
    let val: TomlValue = toml::from_str(&data)
      .with_context(|| format!("invalid TOML in {}", global_path.display()))?;
    warn_unknown_keys(&val, global_path);
    merge_values(&mut merged, val);
  }

  // Deserialize into strongly typed config
  let merged_str = toml::to_string(&merged).context("failed to serialize merged config")?;
  let cfg: ProjectConfig = toml::from_str(&merged_str).context("failed to parse merged config")?;
  Ok(cfg)
}

// Top-level keys only; overlay values replace base values (last wins)
fn merge_values(base: &mut TomlValue, overlay: TomlValue) {
  match (base, overlay) {
    (TomlValue::Table(base_tbl), TomlValue::Table(overlay_tbl)) => {
      for (k, v) in overlay_tbl {
        base_tbl.insert(k, v);
      }
    }
    (base_slot, new_v) => *base_slot = new_v,
  }
}

fn unknown_keys(val: &TomlValue) -> Vec<String> {
  let TomlValue::Table(table) = val else {
    return Vec::new();
  };
  table
    .keys()
    .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
    .cloned()
    .collect()
}

/// Warn about unknown keys in a parsed TOML config file.
///
/// Unknown keys are ignored when deserializing, so a typo would otherwise go unnoticed.
fn warn_unknown_keys(val: &TomlValue, file_path: &Path) {
  for key in unknown_keys(val) {
    anstream::eprintln!(
      "{}: {}",
      "warning".yellow(),
      error_messages::unknown_config_key(&key, file_path.display(), KNOWN_KEYS)
    );
  }
}
