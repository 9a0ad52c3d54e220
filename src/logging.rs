//! Diagnostics logging.
//!
//! Stdout is the game screen, so nothing is logged unless `RUNNER_LOG_PATH`
//! names a file. The level follows `RUST_LOG` and defaults to `info`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable naming the log file.
pub const LOG_PATH_ENV: &str = "RUNNER_LOG_PATH";

/// Install a file logger if `RUNNER_LOG_PATH` is set.
///
/// Returns whether a logger was installed.
pub fn init_from_env() -> Result<bool> {
    match parse_log_path(std::env::var(LOG_PATH_ENV).ok()) {
        Some(path) => {
            init_file(&path)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Append log records to `path`.
pub fn init_file(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;
    Ok(())
}

fn parse_log_path(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_log_path_disables_logging() {
        assert_eq!(parse_log_path(None), None);
        assert_eq!(parse_log_path(Some("   ".to_string())), None);
    }

    #[test]
    fn log_path_is_trimmed() {
        assert_eq!(
            parse_log_path(Some(" /tmp/runner.log\n".to_string())),
            Some(PathBuf::from("/tmp/runner.log"))
        );
    }
}
