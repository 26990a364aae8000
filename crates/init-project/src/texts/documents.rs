use std::path::PathBuf;

use chrono::{DateTime, Local, TimeZone};

use crate::project::ProjectName;

// Embed document templates
const COPILOT_INSTRUCTIONS_TEMPLATE: &str = include_str!(concat!(
  env!("CARGO_MANIFEST_DIR"),
  "/templates/copilot-instructions.md"
));
const TASKS_TEMPLATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/TASKS.md"));
const README_TEMPLATE: &str =
  include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/README.md"));
const GITIGNORE_TEMPLATE: &str =
  include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/gitignore"));

/// The moment documents are generated at, preformatted for interpolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
  pub timestamp: String,
  pub date: String,
}

impl Stamp {
  #[must_use]
  pub fn now() -> Self {
    Self::from_datetime(&Local::now())
  }

  pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self
  where
    Tz::Offset: std::fmt::Display,
  {
    Self {
      timestamp: at.format("%Y-%m-%d %H:%M:%S").to_string(),
      date: at.format("%Y-%m-%d").to_string(),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
  CopilotInstructions,
  Tasks,
  Readme,
  Gitignore,
}

impl Document {
  /// All documents in the order they are written.
  pub const ALL: [Document; 4] = [
    Document::CopilotInstructions,
    Document::Tasks,
    Document::Readme,
    Document::Gitignore,
  ];

  /// Path of the document relative to the project root.
  #[must_use]
  pub fn relative_path(self) -> PathBuf {
    match self {
      Document::CopilotInstructions => PathBuf::from(".github").join("copilot-instructions.md"),
      Document::Tasks => PathBuf::from("pm").join("phase1").join("TASKS.md"),
      Document::Readme => PathBuf::from("README.md"),
      Document::Gitignore => PathBuf::from(".gitignore"),
    }
  }

  /// Human readable label used in progress output.
  #[must_use]
  pub fn label(self) -> &'static str {
    match self {
      Document::CopilotInstructions => "copilot instructions",
      Document::Tasks => "tasks file",
      Document::Readme => "README",
      Document::Gitignore => ".gitignore",
    }
  }

  fn template(self) -> &'static str {
    match self {
      Document::CopilotInstructions => COPILOT_INSTRUCTIONS_TEMPLATE,
      Document::Tasks => TASKS_TEMPLATE,
      Document::Readme => README_TEMPLATE,
      Document::Gitignore => GITIGNORE_TEMPLATE,
    }
  }

  #[must_use]
  pub fn render(self, name: &ProjectName, stamp: &Stamp) -> String {
    self
      .template()
      .replace("{{project_name}}", name.as_str())
      .replace("{{timestamp}}", &stamp.timestamp)
      .replace("{{date}}", &stamp.date)
  }
}
