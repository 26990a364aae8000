use owo_colors::OwoColorize as _;

use crate::project::ProjectName;
use crate::utils::log::t;

const RULE_WIDTH: usize = 50;

pub fn rule() -> String {
  "=".repeat(RULE_WIDTH).blue().to_string()
}

pub fn banner(name: &ProjectName) -> String {
  format!(
    "{} {}",
    "🚀 Initializing project:".blue(),
    t::name(name)
  )
}

pub fn complete() -> String {
  "✅ Project initialization complete!".to_string()
}

pub fn next_steps_lines(name: &ProjectName) -> Vec<String> {
  vec![
    String::new(),
    "Next steps:".yellow().to_string(),
    format!("1. {}", t::cmd(format!("cd {name}"))),
    format!(
      "2. Review {} for development guidelines",
      t::path(".github/copilot-instructions.md")
    ),
    format!("3. Check {} for current tasks", t::path("pm/phase1/TASKS.md")),
    "4. Choose your technology stack and update tasks".to_string(),
    "5. Set up your development environment".to_string(),
    "6. Start development!".to_string(),
  ]
}
