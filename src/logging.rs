//! Tracing/logging initialization.
//!
//! The browser owns the terminal, so log lines go to a file instead of
//! stderr. Verbosity is controlled through `RUST_LOG` and defaults to
//! `info`.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process, appending to `path`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
///
/// # Errors
///
/// Returns an I/O error if the log directory or file cannot be created.
pub fn init(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "storefront starting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_log_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("storefront.log");

        init(&path).unwrap();
        init(&path).unwrap();

        assert!(path.exists());
    }
}
