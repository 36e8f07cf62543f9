use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const DB_FILE: &str = "budgetform.db";
const LOG_FILE: &str = "budgetform.log";

/// Filesystem locations used by a session.
#[derive(Debug, Clone)]
pub(crate) struct Paths {
    pub(crate) data_dir: PathBuf,
}

impl Paths {
    /// Resolve the data directory (an explicit override, or the platform
    /// default) and make sure it exists.
    pub(crate) fn resolve(override_dir: Option<&Path>) -> Result<Self> {
        let data_dir = match override_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_data_dir()?,
        };
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
        Ok(Self { data_dir })
    }

    pub(crate) fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }

    pub(crate) fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "budgetform", "BudgetForm")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

/// Pull a global `--data-dir <path>` flag out of the argument list.
/// Returns the remaining arguments and the override, if any.
pub(crate) fn split_data_dir_flag(args: &[String]) -> Result<(Vec<String>, Option<PathBuf>)> {
    let mut rest = Vec::with_capacity(args.len());
    let mut data_dir = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--data-dir" {
            let value = iter
                .next()
                .ok_or_else(|| anyhow::anyhow!("--data-dir requires a path"))?;
            data_dir = Some(PathBuf::from(value));
        } else if let Some(value) = arg.strip_prefix("--data-dir=") {
            data_dir = Some(PathBuf::from(value));
        } else {
            rest.push(arg.clone());
        }
    }
    Ok((rest, data_dir))
}
