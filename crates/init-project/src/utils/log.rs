/// Token styling helpers.
///
/// The `t` module stands for "tokens". Use these helpers to style
/// specific values inside info messages consistently across the CLI.
pub mod t {
  use std::fmt::Display;

  use owo_colors::OwoColorize as _;

  pub fn path(p: impl Display) -> String {
    format!("{}", p.to_string().cyan())
  }

  pub fn name(name: impl Display) -> String {
    format!("{}", name.to_string().magenta())
  }

  pub fn cmd(cmd: impl Display) -> String {
    format!("{}", cmd.to_string().bright_cyan().bold())
  }

  pub fn ok(s: impl Display) -> String {
    format!("{}", s.to_string().green())
  }

  pub fn warn(s: impl Display) -> String {
    format!("{}", s.to_string().yellow())
  }

  pub fn err(s: impl Display) -> String {
    format!("{}", s.to_string().red())
  }
}

// Reporter-routed output: every macro takes the reporter as its first argument.
// info = neutral, success/warn/error = full-line tint.
// Use `t::*` helpers to highlight tokens in info messages only.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
  Info,
  Success,
  Warn,
  Error,
}

/// A single user-facing line preserving ANSI styling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
  pub level: LogLevel,
  pub ansi: String,
}

/// Destination for user-facing progress lines.
pub trait Reporter {
  fn emit(&self, level: LogLevel, text: String);
}

/// Prints to the terminal, stripping ANSI codes when the stream is not a TTY.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
  fn emit(&self, level: LogLevel, text: String) {
    match level {
      LogLevel::Info | LogLevel::Success | LogLevel::Warn => anstream::println!("{}", text),
      LogLevel::Error => anstream::eprintln!("{}", text),
    }
  }
}

/// Forwards lines over a channel so tests can collect them.
#[cfg(test)]
#[derive(Clone, Debug)]
pub struct ChannelReporter {
  tx: crossbeam_channel::Sender<LogLine>,
}

#[cfg(test)]
impl ChannelReporter {
  pub fn new(tx: crossbeam_channel::Sender<LogLine>) -> Self {
    Self { tx }
  }
}

#[cfg(test)]
impl Reporter for ChannelReporter {
  fn emit(&self, level: LogLevel, text: String) {
    // Receiver gone means nobody is listening anymore
    let _ = self.tx.send(LogLine { level, ansi: text });
  }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
  fn emit(&self, _level: LogLevel, _text: String) {}
}

#[macro_export]
macro_rules! log_info {
  ($reporter:expr, $fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::Reporter::emit(
      $reporter,
      $crate::utils::log::LogLevel::Info,
      format!($fmt $(, $args )*)
    );
  }};
}

#[macro_export]
macro_rules! log_success {
  ($reporter:expr, $fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::Reporter::emit(
      $reporter,
      $crate::utils::log::LogLevel::Success,
      $crate::utils::log::t::ok(format!($fmt $(, $args )*))
    );
  }};
}

#[macro_export]
macro_rules! log_warn {
  ($reporter:expr, $fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::Reporter::emit(
      $reporter,
      $crate::utils::log::LogLevel::Warn,
      $crate::utils::log::t::warn(format!($fmt $(, $args )*))
    );
  }};
}

#[macro_export]
macro_rules! log_error {
  ($reporter:expr, $fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::Reporter::emit(
      $reporter,
      $crate::utils::log::LogLevel::Error,
      $crate::utils::log::t::err(format!($fmt $(, $args )*))
    );
  }};
}
