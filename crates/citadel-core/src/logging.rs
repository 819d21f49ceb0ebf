use std::path::PathBuf;

use tracing_appender::rolling;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Return the log directory path.
///
/// Precedence: `CITADEL_LOG_DIR` env var > platform default.
/// macOS: `~/Library/Logs/citadel/`
/// Linux: `$XDG_DATA_HOME/citadel/logs/` or `~/.local/share/citadel/logs/`
pub fn log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CITADEL_LOG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = dirs::home_dir() {
            return home.join("Library").join("Logs").join("citadel");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        if let Some(data) = dirs::data_dir() {
            return data.join("citadel").join("logs");
        }
    }

    PathBuf::from("logs")
}

const LOG_RETENTION_DAYS: u64 = 7;

/// Remove citadel log files older than `max_age_days` from the given directory.
///
/// Only deletes files whose name starts with `citadel.log` (the prefix used by
/// the daily rolling appender) to avoid removing unrelated files if the log
/// directory is shared.
fn cleanup_old_logs(log_path: &std::path::Path, max_age_days: u64) {
    let cutoff =
        std::time::SystemTime::now() - std::time::Duration::from_secs(max_age_days * 86400);
    if let Ok(entries) = std::fs::read_dir(log_path) {
        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !name.starts_with("citadel.log") {
                continue;
            }
            if let Ok(meta) = entry.metadata() {
                if let Ok(modified) = meta.modified() {
                    if modified < cutoff {
                        let _ = std::fs::remove_file(entry.path());
                    }
                }
            }
        }
    }
}

/// Initialize the logging subsystem.
///
/// Filter controlled by `CITADEL_LOG` or `RUST_LOG` (default: `info`).
/// File output: daily rotation in `log_dir()`, 7-day retention. Nothing goes
/// to stdout or stderr; the terminal belongs to the dashboard.
pub fn init() {
    let filter = EnvFilter::try_from_env("CITADEL_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let log_path = log_dir();
    if let Err(e) = std::fs::create_dir_all(&log_path) {
        eprintln!(
            "warning: failed to create log directory {:?}: {}",
            log_path, e
        );
    }

    cleanup_old_logs(&log_path, LOG_RETENTION_DAYS);

    let file_appender = rolling::daily(&log_path, "citadel.log");
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serialize env-mutating tests to avoid data races.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn log_dir_respects_env_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let original = std::env::var("CITADEL_LOG_DIR").ok();

        std::env::set_var("CITADEL_LOG_DIR", "/tmp/citadel-test-logs");
        assert_eq!(log_dir(), PathBuf::from("/tmp/citadel-test-logs"));

        match original {
            Some(v) => std::env::set_var("CITADEL_LOG_DIR", v),
            None => std::env::remove_var("CITADEL_LOG_DIR"),
        }
    }

    #[test]
    fn log_dir_default_without_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let original = std::env::var("CITADEL_LOG_DIR").ok();

        std::env::remove_var("CITADEL_LOG_DIR");
        let dir = log_dir();

        #[cfg(target_os = "macos")]
        {
            let expected = dirs::home_dir().unwrap().join("Library/Logs/citadel");
            assert_eq!(dir, expected);
        }
        #[cfg(not(target_os = "macos"))]
        {
            assert!(dir.ends_with("citadel/logs") || dir == PathBuf::from("logs"));
        }

        if let Some(v) = original {
            std::env::set_var("CITADEL_LOG_DIR", v);
        }
    }

    #[test]
    fn cleanup_old_logs_removes_stale_files() {
        let tmp = std::env::temp_dir().join("citadel-test-cleanup");
        let _ = std::fs::create_dir_all(&tmp);

        let log_a = tmp.join("citadel.log.2026-01-01");
        let log_b = tmp.join("citadel.log.2026-01-02");
        let other = tmp.join("other.txt");
        std::fs::write(&log_a, "a").unwrap();
        std::fs::write(&log_b, "b").unwrap();
        std::fs::write(&other, "c").unwrap();

        // max_age_days=0 means cutoff is "now", so all matching files get cleaned
        cleanup_old_logs(&tmp, 0);
        assert!(!log_a.exists(), "citadel log file should be deleted");
        assert!(!log_b.exists(), "citadel log file should be deleted");
        assert!(other.exists(), "non-citadel file should be preserved");

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
