// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod log;
pub mod render;
pub mod runner;
pub mod updater;

#[cfg(feature = "cli")]
pub mod cli;

pub use data::{Pick, UpdateRequest};
pub use error::{Region, UpdateError};
pub use updater::{HistoryMode, Transformed, update_document};
