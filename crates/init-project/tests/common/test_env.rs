use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};

pub const GIT_IDENTITY: [(&str, &str); 4] = [
  ("GIT_AUTHOR_NAME", "Tester"),
  ("GIT_AUTHOR_EMAIL", "test@example.com"),
  ("GIT_COMMITTER_NAME", "Tester"),
  ("GIT_COMMITTER_EMAIL", "test@example.com"),
];

/// Isolated sandbox: a working directory, an XDG config home and a git
/// configuration that ignores the user's global settings.
#[derive(Debug)]
pub struct TestEnv {
  temp: TempDir,
}

impl TestEnv {
  pub fn run<F, R>(f: F) -> R
  where
    F: FnOnce(&TestEnv) -> R,
  {
    let env = TestEnv::new();
    f(&env)
  }

  pub fn new() -> Self {
    let temp = Builder::new()
      .prefix("init-project-test-")
      .tempdir_in(tmp_root())
      .expect("temp dir");
    for dir in ["work", "xdg", "empty-bin"] {
      std::fs::create_dir_all(temp.path().join(dir)).expect("create sandbox dir");
    }
    std::fs::write(temp.path().join("gitconfig"), "").expect("write gitconfig");
    Self { temp }
  }

  /// Working directory the binary runs in.
  pub fn path(&self) -> PathBuf {
    self.temp.path().join("work")
  }

  pub fn xdg_home_dir(&self) -> PathBuf {
    self.temp.path().join("xdg")
  }

  pub fn gitconfig_path(&self) -> PathBuf {
    self.temp.path().join("gitconfig")
  }

  /// A directory without any executables, for running with an empty `PATH`.
  pub fn empty_bin_dir(&self) -> PathBuf {
    self.temp.path().join("empty-bin")
  }

  pub fn init_project(&self) -> Result<Command> {
    let mut cmd = Command::cargo_bin("init-project")?;
    cmd.current_dir(self.path());
    cmd.env("XDG_CONFIG_HOME", self.xdg_home_dir());
    self.apply_git_env(&mut cmd);
    cmd.env_remove("RUST_LOG");
    Ok(cmd)
  }

  pub fn apply_git_env<C: GitEnv>(&self, cmd: &mut C) {
    cmd.set_env("GIT_CONFIG_GLOBAL", self.gitconfig_path().as_os_str());
    cmd.set_env("GIT_CONFIG_NOSYSTEM", "1".as_ref());
    for (key, value) in GIT_IDENTITY {
      cmd.set_env(key, value.as_ref());
    }
  }

  pub fn write_xdg_config(&self, body: &str) -> Result<PathBuf> {
    let path = self.xdg_home_dir().join("init-project").join("config.toml");
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).map_err(|err| {
        anyhow::anyhow!(
          "create parent dir for XDG config under {}: {err}",
          self.xdg_home_dir().display()
        )
      })?;
    }
    std::fs::write(&path, body).map_err(|err| {
      anyhow::anyhow!("write XDG config at {}: {err}", path.display())
    })?;
    Ok(path)
  }

  /// Names of the entries directly inside `dir`, sorted.
  pub fn list_dir(&self, dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
      names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
  }
}

/// Shared by `assert_cmd::Command` and `std::process::Command` so both can
/// receive the isolated git environment.
pub trait GitEnv {
  fn set_env(&mut self, key: &str, value: &std::ffi::OsStr);
}

impl GitEnv for Command {
  fn set_env(&mut self, key: &str, value: &std::ffi::OsStr) {
    self.env(key, value);
  }
}

impl GitEnv for std::process::Command {
  fn set_env(&mut self, key: &str, value: &std::ffi::OsStr) {
    self.env(key, value);
  }
}

pub fn tmp_root() -> std::path::PathBuf {
  let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  let workspace_root = manifest_dir
    .parent()
    .and_then(|parent| parent.parent())
    .unwrap_or(&manifest_dir)
    .to_path_buf();
  let root = workspace_root.join("target").join("test-tmp");
  let _ = std::fs::create_dir_all(&root);
  root
}
