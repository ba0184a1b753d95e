// src/log.rs
//
// Diagnostics go to stderr (or a file); stdout belongs to the page output in
// dry-run mode and to the one-line summary otherwise. Lines carry the time
// elapsed since start.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::options::LogOptions;
use crate::file::ensure_parent;

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(opts: &LogOptions) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&opts.level))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::consts::DEFAULT_LOG_LEVEL));

    let builder = fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::uptime())
        .with_target(false);

    let file = opts.file.as_ref().and_then(|path| {
        if let Err(e) = ensure_parent(path) {
            eprintln!("Cannot create log directory for {}: {e}; logging to stderr", path.display());
            return None;
        }
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => Some(f),
            Err(e) => {
                eprintln!("Cannot open log file {}: {e}; logging to stderr", path.display());
                None
            }
        }
    });

    let _ = match file {
        Some(f) => builder.with_ansi(false).with_writer(Mutex::new(f)).try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };
}
