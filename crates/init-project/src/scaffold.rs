//! Materializes a new project's initial directory tree.
//!
//! The sequence is strictly ordered: existence check, directories, documents,
//! then the optional version-control step. Only the last step may fail without
//! failing the whole operation.

use std::fs;
use std::io::Write as _;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::project::{ProjectName, ProjectOptions};
use crate::texts::documents::{Document, Stamp};
use crate::utils::git::{GitCli, VersionControl};
use crate::utils::log::{ConsoleReporter, Reporter};
use crate::{log_success, log_warn};

#[derive(Debug, Error)]
pub enum ScaffoldError {
  #[error("Project directory '{}' already exists!", .path.display())]
  AlreadyExists { path: PathBuf },
  #[error("failed to {action} {}", .path.display())]
  Io {
    action: &'static str,
    path: PathBuf,
    source: std::io::Error,
  },
}

impl ScaffoldError {
  fn io<'a>(action: &'static str, path: &'a Path) -> impl FnOnce(std::io::Error) -> Self + 'a {
    move |source| Self::Io {
      action,
      path: path.to_path_buf(),
      source,
    }
  }
}

pub struct Scaffolder<'a> {
  vcs: &'a dyn VersionControl,
  reporter: &'a dyn Reporter,
  stamp: Option<Stamp>,
}

impl<'a> Scaffolder<'a> {
  pub fn new(vcs: &'a dyn VersionControl, reporter: &'a dyn Reporter) -> Self {
    Self {
      vcs,
      reporter,
      stamp: None,
    }
  }

  /// Render documents with a fixed time instead of the current local time.
  #[must_use]
  pub fn with_stamp(mut self, stamp: Stamp) -> Self {
    self.stamp = Some(stamp);
    self
  }

  /// Create the project tree for `name` under `options.path` and return its absolute path.
  ///
  /// # Errors
  /// Returns [`ScaffoldError::AlreadyExists`] when the target directory exists
  /// before anything is written, and [`ScaffoldError::Io`] when any directory or
  /// file cannot be created. A partially created tree is left in place.
  /// Version-control failures are reported as warnings and never returned.
  pub fn init_project(
    &self,
    name: &ProjectName,
    options: &ProjectOptions,
  ) -> Result<PathBuf, ScaffoldError> {
    let base = std::path::absolute(&options.path)
      .map(|abs| normalize(&abs))
      .map_err(ScaffoldError::io("resolve", &options.path))?;
    let project = base.join(name);

    if project.exists() {
      return Err(ScaffoldError::AlreadyExists { path: project });
    }

    fs::create_dir_all(&project).map_err(ScaffoldError::io("create", &project))?;
    log_success!(self.reporter, "✓ Created project directory: {}", project.display());

    let pm = project.join("pm");
    self.create_dir(&pm)?;
    log_success!(self.reporter, "✓ Created PM directory: {}", pm.display());

    let phase1 = pm.join("phase1");
    self.create_dir(&phase1)?;
    log_success!(self.reporter, "✓ Created Phase 1 directory: {}", phase1.display());

    let src = project.join("src");
    self.create_dir(&src)?;
    log_success!(self.reporter, "✓ Created source directory: {}", src.display());

    let stamp = self.stamp.clone().unwrap_or_else(Stamp::now);
    for doc in Document::ALL {
      let path = project.join(doc.relative_path());
      if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ScaffoldError::io("create", parent))?;
      }
      write_new(&path, &doc.render(name, &stamp))?;
      log_success!(self.reporter, "✓ Created {}: {}", doc.label(), path.display());
    }

    if options.npm {
      log::debug!("npm option is set but has no effect");
    }

    if options.git {
      self.initialize_repo(&project, &options.commit_message);
    }

    Ok(project)
  }

  fn create_dir(&self, path: &Path) -> Result<(), ScaffoldError> {
    log::debug!("creating directory {}", path.display());
    fs::create_dir(path).map_err(ScaffoldError::io("create", path))
  }

  fn initialize_repo(&self, project: &Path, message: &str) {
    if let Err(err) = self.vcs.init(project) {
      self.warn_git(&err);
      return;
    }
    log_success!(self.reporter, "✓ Initialized git repository");

    let commit = self
      .vcs
      .stage_all(project)
      .and_then(|()| self.vcs.commit(project, message));
    match commit {
      Ok(id) => log_success!(self.reporter, "✓ Created initial git commit {}", id),
      Err(err) => self.warn_git(&err),
    }
  }

  fn warn_git(&self, err: &anyhow::Error) {
    log::debug!("git step failed: {err:?}");
    log_warn!(
      self.reporter,
      "⚠ Warning: Could not initialize git repository: {}",
      err
    );
  }
}

// Fold `.` and `..` without touching the filesystem; `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
  let mut out = PathBuf::new();
  for comp in path.components() {
    match comp {
      Component::CurDir => {}
      Component::ParentDir => {
        let at_root = matches!(
          out.components().next_back(),
          None | Some(Component::RootDir | Component::Prefix(_))
        );
        if !at_root {
          out.pop();
        }
      }
      other => out.push(other),
    }
  }
  out
}

fn write_new(path: &Path, contents: &str) -> Result<(), ScaffoldError> {
  log::debug!("writing {}", path.display());
  let mut file = fs::OpenOptions::new()
    .write(true)
    .create_new(true)
    .open(path)
    .map_err(ScaffoldError::io("create", path))?;
  file
    .write_all(contents.as_bytes())
    .map_err(ScaffoldError::io("write", path))
}

/// Scaffold with the `git` executable and console output.
///
/// # Errors
/// See [`Scaffolder::init_project`].
pub fn init_project(name: &ProjectName, options: &ProjectOptions) -> Result<PathBuf, ScaffoldError> {
  let git = GitCli::default();
  Scaffolder::new(&git, &ConsoleReporter).init_project(name, options)
}
