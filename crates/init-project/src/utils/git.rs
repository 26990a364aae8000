use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

use gix as git;

use crate::utils::error_messages;

/// Length of the abbreviated commit id reported after committing.
const SHORT_ID_LEN: usize = 7;

/// The version-control operations needed to put a fresh project under
/// source control. Failures are returned, never raised, so callers can
/// decide whether they are fatal.
pub trait VersionControl {
  fn init(&self, workdir: &Path) -> Result<()>;
  fn stage_all(&self, workdir: &Path) -> Result<()>;
  /// Commit the staged changes and return the abbreviated id of the new commit.
  fn commit(&self, workdir: &Path, message: &str) -> Result<String>;
}

/// [`VersionControl`] backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
  program: OsString,
}

impl Default for GitCli {
  fn default() -> Self {
    Self {
      program: OsString::from("git"),
    }
  }
}

impl GitCli {
  /// Use a different executable instead of `git` from `PATH`.
  pub fn with_program(program: impl Into<OsString>) -> Self {
    Self {
      program: program.into(),
    }
  }

  fn run(&self, args: &[&str], cwd: &Path) -> Result<()> {
    log::debug!("running git {} in {}", args.join(" "), cwd.display());
    // Run git quietly: drop stdout, keep stderr for the error message.
    let output = Command::new(&self.program)
      .current_dir(cwd)
      .args(args)
      .stdin(Stdio::null())
      .stdout(Stdio::null())
      .stderr(Stdio::piped())
      .output()
      .with_context(|| format!("failed to run git {}", args.join(" ")))?;
    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      let stderr = stderr.trim();
      if stderr.is_empty() {
        bail!(error_messages::git_command_failed(
          &args.join(" "),
          output.status
        ));
      }
      bail!(error_messages::git_command_failed_with_stderr(
        &args.join(" "),
        output.status,
        stderr
      ));
    }
    Ok(())
  }
}

impl VersionControl for GitCli {
  fn init(&self, workdir: &Path) -> Result<()> {
    self.run(&["init"], workdir)
  }

  fn stage_all(&self, workdir: &Path) -> Result<()> {
    self.run(&["add", "."], workdir)
  }

  fn commit(&self, workdir: &Path, message: &str) -> Result<String> {
    self.run(&["commit", "-m", message], workdir)?;
    head_short_id(workdir)
  }
}

/// Resolve the abbreviated id of `HEAD` in the repository at `workdir`.
pub fn head_short_id(workdir: &Path) -> Result<String> {
  let repo = git::open(workdir)
    .with_context(|| format!("failed to open repository at {}", workdir.display()))?;
  let head = repo.head_id().context("failed to resolve HEAD")?;
  Ok(head.to_hex_with_len(SHORT_ID_LEN).to_string())
}
