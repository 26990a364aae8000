use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::utils::error_messages;

static PROJECT_NAME_RE: OnceLock<Regex> = OnceLock::new();

pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial commit: Project structure created";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{msg}: '{name}'", msg = error_messages::INVALID_PROJECT_NAME)]
pub struct InvalidProjectName {
  pub name: String,
}

/// A project name usable both as a directory name and inside generated documents.
///
/// Only ASCII letters, digits, `_`, `.` and `-` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
  pub fn parse(input: &str) -> Result<Self, InvalidProjectName> {
    let re =
      PROJECT_NAME_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("valid regex"));
    if !re.is_match(input) {
      return Err(InvalidProjectName {
        name: input.to_string(),
      });
    }
    Ok(Self(input.to_string()))
  }

  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl FromStr for ProjectName {
  type Err = InvalidProjectName;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl fmt::Display for ProjectName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl AsRef<std::path::Path> for ProjectName {
  fn as_ref(&self) -> &std::path::Path {
    std::path::Path::new(&self.0)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
  /// Directory the project directory is created in.
  pub path: PathBuf,
  /// Initialize a git repository with an initial commit.
  pub git: bool,
  /// Accepted for compatibility; nothing reads it.
  pub npm: bool,
  pub commit_message: String,
}

impl Default for ProjectOptions {
  fn default() -> Self {
    Self {
      path: PathBuf::from("."),
      git: true,
      npm: true,
      commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
    }
  }
}
