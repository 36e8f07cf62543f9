use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `budgetform=trace`).
pub(crate) const LOG_ENV: &str = "BUDGETFORM_LOG";

/// Send `tracing` output to `log_path`. The terminal belongs to the UI, so
/// nothing is written to stdout or stderr. Failure to open the log file
/// leaves logging disabled.
pub(crate) fn init(log_path: &Path) {
    let file = match OpenOptions::new().create(true).append(true).open(log_path) {
        Ok(f) => f,
        Err(_) => return,
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
