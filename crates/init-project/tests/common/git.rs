use std::path::Path;

use crate::common::test_env::TestEnv;
use anyhow::{Context, Result, anyhow};

impl TestEnv {
  pub fn git(&self, cwd: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new("git");
    cmd.current_dir(cwd);
    self.apply_git_env(&mut cmd);
    cmd
  }

  pub fn git_stdout(&self, cwd: &Path, args: &[&str]) -> Result<String> {
    let output = self
      .git(cwd)
      .args(args)
      .stdout(std::process::Stdio::piped())
      .stderr(std::process::Stdio::piped())
      .output()
      .context("run git command")?;
    if !output.status.success() {
      return Err(anyhow!(
        "git {:?} failed with status {status} and stderr: {stderr}",
        args,
        status = output.status,
        stderr = String::from_utf8_lossy(&output.stderr)
      ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  pub fn git_commit_count(&self, cwd: &Path) -> Result<u32> {
    let count = self.git_stdout(cwd, &["rev-list", "--count", "HEAD"])?;
    count
      .parse()
      .with_context(|| format!("unexpected rev-list output: {count}"))
  }

  /// Paths tracked in `HEAD`, sorted.
  pub fn git_tracked_files(&self, cwd: &Path) -> Result<Vec<String>> {
    let out = self.git_stdout(cwd, &["ls-tree", "-r", "--name-only", "HEAD"])?;
    let mut files: Vec<String> = out.lines().map(str::to_string).collect();
    files.sort();
    Ok(files)
  }
}
