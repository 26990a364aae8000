use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

pub mod config;
pub mod project;
pub mod scaffold;
pub mod texts;
pub mod utils;

use crate::config::Overrides;
use crate::project::ProjectName;
use crate::texts::summary;
use crate::utils::log::ConsoleReporter;

pub use crate::project::{InvalidProjectName, ProjectOptions};
pub use crate::scaffold::{ScaffoldError, Scaffolder, init_project};

/// init-project - Scaffold a new project with a phase-based project management layout.
#[derive(Debug, Parser)]
#[command(name = "init-project", author, version, about, long_about = None)]
pub struct Cli {
  /// Name of the project to create
  #[arg(value_name = "PROJECT_NAME")]
  project_name: String,
  /// Base path where the project directory will be created [default: .]
  #[arg(short, long, value_name = "PATH")]
  path: Option<PathBuf>,
  /// Skip git initialization
  #[arg(long)]
  no_git: bool,
  /// Skip npm initialization (accepted for compatibility, has no effect)
  #[arg(long)]
  no_npm: bool,
}

pub fn parse() -> Cli {
  Cli::parse()
}

pub fn run() -> Result<()> {
  let cli = parse();
  // Validate before touching config or the filesystem
  let name = ProjectName::parse(&cli.project_name)?;

  let cfg = config::load_config()?;
  let options = cfg.options(&Overrides {
    path: cli.path,
    no_git: cli.no_git,
    no_npm: cli.no_npm,
  });
  log::debug!("options: {options:?}");

  let reporter = ConsoleReporter;
  log_info!(&reporter, "{}", summary::banner(&name));
  log_info!(&reporter, "{}", summary::rule());

  let project = init_project(&name, &options)?;

  log_info!(&reporter, "{}", summary::rule());
  log_success!(&reporter, "{}", summary::complete());
  for line in summary::next_steps_lines(&name) {
    log_info!(&reporter, "{}", line);
  }
  log::debug!("project created at {}", project.display());
  Ok(())
}
