use init_project::log_error;
use init_project::utils::log::ConsoleReporter;

fn main() {
  let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
    .try_init();
  if let Err(err) = init_project::run() {
    log_error!(&ConsoleReporter, "❌ Error: {:#}", err);
    std::process::exit(1);
  }
}
