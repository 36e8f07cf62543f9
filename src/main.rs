mod config;
mod db;
mod logging;
mod models;
mod run;
mod tracker;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let raw_args: Vec<String> = std::env::args().collect();
    let (args, data_dir) = config::split_data_dir_flag(&raw_args)?;
    let paths = config::Paths::resolve(data_dir.as_deref())?;
    logging::init(&paths.log_path());
    tracing::info!(data_dir = %paths.data_dir.display(), "starting budgetform");

    let mut db = db::Database::open(&paths.db_path())?;

    match args.len() {
        0 | 1 => run::as_tui(&mut db),
        _ => run::as_cli(&args, &mut db),
    }
}
