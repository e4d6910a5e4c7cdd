//! File-based logging for the TUI.
//!
//! Stdout belongs to the terminal UI, so logs go to per-run files under a
//! `logs/` directory next to the executable. The level comes from the
//! `RUST_LOG` environment variable, defaulting to `info`.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging. Failures are reported on stderr and otherwise
/// ignored: a missing log file must never stop the app.
pub fn init_logging() {
    let log_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("logs")))
        .unwrap_or_else(|| PathBuf::from("logs"));

    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create logs directory: {e}");
        return;
    }

    // One file per run, e.g. logs/revise-term.2026-08-05-14-30-25.log
    let log_path = log_dir.join(format!(
        "revise-term.{}.log",
        Local::now().format("%Y-%m-%d-%H-%M-%S")
    ));
    let log_file = match fs::File::create(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to create log file: {e}");
            return;
        }
    };

    // Non-blocking writer so logging never stalls the draw loop
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // The guard must live as long as the process; leaking it keeps the
    // writer flushing until exit.
    std::mem::forget(guard);

    tracing::info!("Logging initialized - writing to {}", log_path.display());
}
