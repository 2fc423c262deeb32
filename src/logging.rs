//! File logging.
//!
//! The terminal belongs to the TUI, so log records go to
//! `<home>/stackit.log`. Filtering follows `STACKIT_LOG` with the usual
//! `EnvFilter` syntax and defaults to `stackit=info`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "STACKIT_LOG";
const DEFAULT_FILTER: &str = "stackit=info";

/// Filter from `STACKIT_LOG`, falling back to the default directive.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Install the global subscriber writing to `log_path` in append mode.
///
/// Fails if the log file cannot be opened or a subscriber is already set.
pub fn init(log_path: &Path) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("failed to install logger: {}", e))?;

    tracing::info!(path = %log_path.display(), "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("stackit.log");

        // Another test may already own the global subscriber
        let _ = init(&path);
        assert!(path.exists());
    }
}
