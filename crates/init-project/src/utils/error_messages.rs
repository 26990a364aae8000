//! Common error messages used across the codebase.
//! Centralizes error message strings to ensure consistency and simplify maintenance.

// Validation errors
pub(crate) const INVALID_PROJECT_NAME: &str =
  "Project name must be alphanumeric (underscores, hyphens, and dots allowed)";

// Git command errors - format functions
pub(crate) fn git_command_failed(command: &str, status: impl std::fmt::Display) -> String {
  format!("git {command} failed: status={status}")
}

pub(crate) fn git_command_failed_with_stderr(
  command: &str,
  status: impl std::fmt::Display,
  stderr: impl std::fmt::Display,
) -> String {
  format!("git {command} failed: status={status}: {stderr}")
}

// Config errors
pub(crate) fn unknown_config_key(
  key: impl std::fmt::Display,
  file: impl std::fmt::Display,
  known: &[&str],
) -> String {
  format!(
    "unknown config key '{key}' in {file} (did you mean one of: {}?)",
    known.join(", ")
  )
}
