// src/error.rs
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which marker pair a structural problem concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Daily,
    History,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Daily => f.write_str("daily"),
            Region::History => f.write_str("history"),
        }
    }
}

#[derive(Error, Debug)]
pub enum UpdateError {
    /// Markers absent or out of order. Nothing is written.
    #[error("{region} markers not found or out of order: {reason}")]
    Structural { region: Region, reason: String },

    /// Payload is not valid JSON. The document is never touched.
    #[error("invalid input JSON: {0}")]
    Input(#[from] serde_json::Error),

    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UpdateError {
    pub(crate) fn structural(region: Region, reason: impl Into<String>) -> Self {
        UpdateError::Structural { region, reason: reason.into() }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UpdateError::Io { path: path.into(), source }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, UpdateError::Structural { .. })
    }

    pub fn is_input(&self) -> bool {
        matches!(self, UpdateError::Input(_))
    }
}

pub type Result<T> = std::result::Result<T, UpdateError>;
