//! Logging system with daily rotation.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use time::macros::format_description;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// File name prefix shared by all log files.
const LOG_PREFIX: &str = "site-config";

/// Default log directory: `<cache dir>/site-config/logs`.
pub fn default_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_PREFIX)
        .join("logs")
}

/// Initialize the logging system, writing to `log_dir`.
pub fn init(log_dir: &Path) -> Result<()> {
    // Create log directory if needed
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)?;
    }

    // Drop logs from earlier runs before opening today's file
    cleanup_old_logs(log_dir)?;

    // One file per day, named site-config.YYYY-MM-DD
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_PREFIX);

    // Local timezone for timestamps
    let time_format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let local_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = OffsetTime::new(local_offset, time_format);

    // File output only; stdout/stderr carry command output
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(timer),
        );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

/// Remove log files older than 2 days.
pub fn cleanup_old_logs(log_dir: &Path) -> Result<()> {
    use std::time::{Duration, SystemTime};

    let two_days = Duration::from_secs(2 * 24 * 60 * 60);
    let cutoff = SystemTime::now() - two_days;

    if !log_dir.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(log_dir)? {
        let entry = entry?;
        let path = entry.path();

        // Only plain files
        if !path.is_file() {
            continue;
        }

        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => continue,
        };

        // Leave other tools' files alone
        if !filename.starts_with(LOG_PREFIX) {
            continue;
        }

        // Age by modification time
        if let Ok(metadata) = entry.metadata() {
            if let Ok(modified) = metadata.modified() {
                if modified < cutoff {
                    let _ = fs::remove_file(&path);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_keeps_fresh_and_foreign_files() {
        let dir = std::env::temp_dir().join(format!("site-config-logs-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("site-config.2026-10-19"), "fresh").unwrap();
        fs::write(dir.join("other.log"), "not ours").unwrap();

        cleanup_old_logs(&dir).unwrap();

        assert!(dir.join("site-config.2026-10-19").exists());
        assert!(dir.join("other.log").exists());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_cleanup_missing_dir_is_ok() {
        let dir = std::env::temp_dir().join("site-config-logs-does-not-exist");
        assert!(cleanup_old_logs(&dir).is_ok());
    }
}
