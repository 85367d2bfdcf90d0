use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_FILE: &str = "native.log";
const LOG_DIR_NAME: &str = ".chorequest";
const MAX_LOG_FILES: usize = 14; // two weeks of daily files

/// `~/.chorequest`
pub fn log_dir() -> Option<PathBuf> {
    dirs_next::home_dir().map(|home| home.join(LOG_DIR_NAME))
}

/// Route `tracing` output to a daily file under `~/.chorequest`.
///
/// `RUST_LOG` still applies; this crate logs at `debug` regardless.
///
/// # Errors
/// Returns an error if the log directory cannot be created or a subscriber is
/// already installed.
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = log_dir().ok_or("Cannot find home directory")?;
    fs::create_dir_all(&log_dir)?;

    // Prune before the subscriber exists; failures go to stderr
    for err in prune_logs(&log_dir, MAX_LOG_FILES) {
        eprintln!("log retention: {err}");
    }

    let file_appender = rolling::daily(&log_dir, LOG_FILE);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(file_appender).with_ansi(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive("chorequest=debug".parse()?)
                .add_directive("chorequest_lib=debug".parse()?),
        )
        .try_init()?;

    tracing::info!("Logging to {}/{} (daily rotation)", log_dir.display(), LOG_FILE);
    Ok(())
}

/// Delete all but the `keep` newest rotated log files in `dir`.
/// Returns the failures instead of stopping at the first.
pub fn prune_logs(dir: &Path, keep: usize) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => return vec![format!("failed to read {}: {e}", dir.display())],
    };

    let mut logs: Vec<(PathBuf, Option<SystemTime>)> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|ft| ft.is_file()))
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(LOG_FILE))
        .map(|entry| {
            let modified = entry.metadata().ok().and_then(|m| m.modified().ok());
            (entry.path(), modified)
        })
        .collect();

    // Newest first; files without a timestamp sort last and go first
    logs.sort_by(|a, b| match (a.1, b.1) {
        (Some(a_time), Some(b_time)) => b_time.cmp(&a_time),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.0.cmp(&a.0),
    });

    logs.into_iter()
        .skip(keep)
        .filter_map(|(path, _)| {
            fs::remove_file(&path)
                .err()
                .map(|e| format!("failed to remove {}: {e}", path.display()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn touch(dir: &Path, name: &str, age_days: u64) {
        let path = dir.join(name);
        fs::write(&path, "line\n").unwrap();
        let modified = SystemTime::now() - Duration::from_secs(age_days * 86_400);
        fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(modified)
            .unwrap();
    }

    #[test]
    fn test_prune_keeps_newest() {
        let dir = tempfile::tempdir().unwrap();
        for day in 0..5 {
            touch(dir.path(), &format!("{LOG_FILE}.2025-01-0{}", day + 1), 5 - day);
        }

        let errors = prune_logs(dir.path(), 3);
        assert!(errors.is_empty());

        let mut left: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        left.sort();
        assert_eq!(
            left,
            vec![
                format!("{LOG_FILE}.2025-01-03"),
                format!("{LOG_FILE}.2025-01-04"),
                format!("{LOG_FILE}.2025-01-05"),
            ]
        );
    }

    #[test]
    fn test_prune_ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "preferences.json", 30);
        touch(dir.path(), &format!("{LOG_FILE}.2025-01-01"), 1);

        assert!(prune_logs(dir.path(), 0).is_empty());
        assert!(dir.path().join("preferences.json").exists());
        assert!(!dir.path().join(format!("{LOG_FILE}.2025-01-01")).exists());
    }

    #[test]
    fn test_prune_missing_dir_reports() {
        let dir = tempfile::tempdir().unwrap();
        let errors = prune_logs(&dir.path().join("absent"), 3);
        assert_eq!(errors.len(), 1);
    }
}
