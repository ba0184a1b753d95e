// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

/// Everything one invocation needs. `Default` mirrors the CLI defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateOptions {
    pub document: PathBuf,
    pub input: InputSource,
    pub history: HistoryMode,
    pub write: WriteMode,
    pub dry_run: bool,
    pub log: LogOptions,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            document: PathBuf::from(DEFAULT_DOCUMENT),
            input: InputSource::Stdin,
            history: HistoryMode::Archive,
            write: WriteMode::Atomic,
            dry_run: false,
            log: LogOptions::default(),
        }
    }
}

impl UpdateOptions {
    /// Target page plus defaults for everything else.
    pub fn for_document<P: AsRef<Path>>(document: P) -> Self {
        Self { document: document.as_ref().to_path_buf(), ..Self::default() }
    }
}

/// Where the JSON payload comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    /// Already in memory (library callers, tests).
    Inline(String),
}

/// Whether the outgoing daily block is migrated into the history region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HistoryMode {
    #[default]
    Archive,
    /// Daily region only; history markers are not required.
    Disabled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write `<doc>.tmp` then rename over the target.
    #[default]
    Atomic,
    /// Truncate and overwrite the target directly.
    InPlace,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogOptions {
    /// `EnvFilter` directive; `RUST_LOG` wins when set.
    pub level: String,
    /// Append plain lines here instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self { level: s!(DEFAULT_LOG_LEVEL), file: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli() {
        let opts = UpdateOptions::default();
        assert_eq!(opts.document, PathBuf::from("index.html"));
        assert_eq!(opts.input, InputSource::Stdin);
        assert_eq!(opts.history, HistoryMode::Archive);
        assert_eq!(opts.write, WriteMode::Atomic);
        assert!(!opts.dry_run);
    }
}
