//! Tracing subscriber setup
//!
//! The terminal belongs to the UI, so log output goes to a file in the
//! system temp directory. The filter is fixed; there is no environment
//! override.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::constants::{LOG_FILE, LOG_FILTER};

pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

/// Install the global subscriber. Returns false when the log file could not
/// be created or a subscriber is already installed; the editor runs either way.
pub fn init_global(log_file_path: &Path) -> bool {
    let Ok(log_file) = File::create(log_file_path) else {
        return false;
    };
    build_subscriber(log_file).try_init().is_ok()
}

pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer().with_ansi(false).with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(EnvFilter::new(LOG_FILTER))
}
