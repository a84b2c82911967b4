//! Logging init: file under the XDG state dir, stderr when unavailable.

use anyhow::Result;
use std::fs;
use std::io;
use tracing_subscriber::EnvFilter;

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,urlkit=debug"))
}

/// Initialize structured logging to `~/.local/state/urlkit/urlkit.log`.
/// Falls back to stderr when the state directory cannot be prepared, so
/// callers never have to handle a logging failure.
pub fn init_logging() {
    match open_log_file() {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(default_filter())
                .with_ansi(false)
                .with_writer(move || -> Box<dyn io::Write> {
                    match file.try_clone() {
                        Ok(f) => Box::new(f),
                        Err(_) => Box::new(io::stderr()),
                    }
                })
                .init();
        }
        Err(_) => {
            tracing_subscriber::fmt()
                .with_env_filter(default_filter())
                .with_writer(io::stderr)
                .with_ansi(false)
                .init();
        }
    }
}

fn open_log_file() -> Result<fs::File> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlkit")?;
    let log_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&log_dir)?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("urlkit.log"))?;
    Ok(file)
}
