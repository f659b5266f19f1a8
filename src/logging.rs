//! File-only tracing setup. The terminal belongs to the survey UI, so
//! nothing is ever logged to stdout or stderr.

use std::path::PathBuf;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable naming the log file prefix.
pub const LOG_ENV: &str = "FEEDBACK_SURVEY_LOG";

/// `{prefix}.{unix seconds}.{pid}`, so concurrent runs get their own file.
pub fn log_file_path(prefix: &str, unix_seconds: u64, pid: u32) -> PathBuf {
    PathBuf::from(format!("{prefix}.{unix_seconds}.{pid}"))
}

/// Install the global subscriber when `FEEDBACK_SURVEY_LOG` is set.
///
/// The level comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let Ok(prefix) = std::env::var(LOG_ENV) else {
        return;
    };

    let unix_seconds = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = log_file_path(&prefix, unix_seconds, std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot create log file {}: {err}", path.display());
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_timer(UtcTime::rfc_3339()),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_is_suffixed_with_time_and_pid() {
        let path = log_file_path("/tmp/survey.log", 1_705_314_600, 4242);
        assert_eq!(path, PathBuf::from("/tmp/survey.log.1705314600.4242"));
    }
}
