//! Tracing initialization and configuration.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives
pub const LOG_ENV_VAR: &str = "DRIFT_RATIO_LOG";

/// Where log output should go
enum LogSink {
    File(File),
    Stderr,
}

impl LogSink {
    /// Filter used when `DRIFT_RATIO_LOG` is unset. Stderr shares the
    /// terminal with the printed report, so it only carries warnings.
    fn default_filter(&self) -> &'static str {
        match self {
            LogSink::File(_) => "drift_ratio_checker=info",
            LogSink::Stderr => "drift_ratio_checker=warn",
        }
    }
}

/// Initialize logging.
///
/// Reads `DRIFT_RATIO_LOG` for filter directives, falling back to
/// `drift_ratio_checker=info` for a log file and `drift_ratio_checker=warn`
/// for stderr. Output goes to `log_file` when given, otherwise to stderr in
/// headless mode. The form owns the terminal, so
/// without a log file it installs no subscriber at all.
///
/// Calling this more than once is harmless; only the first call installs
/// a subscriber.
pub fn init_tracing(log_file: Option<&Path>, headless: bool) -> io::Result<()> {
    let sink = match log_file {
        Some(path) => LogSink::File(File::options().create(true).append(true).open(path)?),
        None if headless => LogSink::Stderr,
        None => return Ok(()),
    };

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(sink.default_filter()));

        match sink {
            LogSink::File(file) => tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_target(true)
                        .with_writer(Mutex::new(file)),
                )
                .with(filter)
                .init(),
            LogSink::Stderr => tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(io::stderr))
                .with(filter)
                .init(),
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_form_mode_without_log_file_is_noop() {
        assert!(init_tracing(None, false).is_ok());
    }

    #[test]
    fn test_stderr_defaults_to_warnings_only() {
        let dir = tempdir().unwrap();
        let file = File::create(dir.path().join("drift.log")).unwrap();
        assert_eq!(LogSink::Stderr.default_filter(), "drift_ratio_checker=warn");
        assert_eq!(LogSink::File(file).default_filter(), "drift_ratio_checker=info");
    }

    #[test]
    fn test_unopenable_log_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("drift.log");
        assert!(init_tracing(Some(&path), false).is_err());
    }
}
