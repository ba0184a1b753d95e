// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::{DEFAULT_DOCUMENT, DEFAULT_LOG_LEVEL};
use crate::config::options::{HistoryMode, InputSource, LogOptions, UpdateOptions, WriteMode};
use crate::runner::{self, RunSummary};

/// Rewrite the daily picks block of a page from a JSON payload on stdin,
/// moving the previous day's list into the history block.
#[derive(Parser, Debug)]
#[command(name = "update_daily_picks", version)]
#[command(after_help = "Payload: {\"date\":\"YYYY-MM-DD\",\"picks\":[{\"title\":\"..\",\"url\":\"..\",\"tag\":\"..\"}]}")]
pub struct Args {
    /// Page to update
    #[arg(short, long, default_value = DEFAULT_DOCUMENT)]
    pub document: PathBuf,

    /// Read the payload from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Only replace the daily block; history markers are not required
    #[arg(long)]
    pub no_history: bool,

    /// Overwrite the page directly instead of writing a temp file and renaming
    #[arg(long)]
    pub in_place: bool,

    /// Print the new page to stdout and leave the file alone
    #[arg(long)]
    pub dry_run: bool,

    /// Log filter (RUST_LOG takes precedence)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn into_options(self) -> UpdateOptions {
        UpdateOptions {
            document: self.document,
            input: self.input.map_or(InputSource::Stdin, InputSource::File),
            history: if self.no_history { HistoryMode::Disabled } else { HistoryMode::Archive },
            write: if self.in_place { WriteMode::InPlace } else { WriteMode::Atomic },
            dry_run: self.dry_run,
            log: LogOptions { level: self.log_level, file: self.log_file },
        }
    }
}

/// Parse args, set up logging, run, report.
pub fn run() -> crate::error::Result<RunSummary> {
    let opts = Args::parse().into_options();
    crate::log::init(&opts.log);

    let summary = runner::run(&opts)?;
    report(&summary);
    Ok(summary)
}

fn report(summary: &RunSummary) {
    if let Some(page) = &summary.preview {
        print!("{page}");
        return;
    }

    let mut line = if summary.written {
        format!("Updated {}", summary.path.display())
    } else {
        format!("Unchanged {}", summary.path.display())
    };
    line.push_str(&format!(" ({}, {} picks", summary.date, summary.rendered));
    if summary.dropped > 0 {
        line.push_str(&format!(", {} dropped", summary.dropped));
    }
    if let Some(label) = &summary.archived {
        line.push_str(&format!(", archived {label}"));
    }
    line.push(')');
    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_update_options() {
        let args = Args::try_parse_from(["update_daily_picks"]).unwrap();
        assert_eq!(args.into_options(), UpdateOptions::default());
    }

    #[test]
    fn flags_map_to_options() {
        let args = Args::try_parse_from([
            "update_daily_picks",
            "-d",
            "site/index.html",
            "--input",
            "picks.json",
            "--no-history",
            "--in-place",
            "--dry-run",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let opts = args.into_options();
        assert_eq!(opts.document, PathBuf::from("site/index.html"));
        assert_eq!(opts.input, InputSource::File(PathBuf::from("picks.json")));
        assert_eq!(opts.history, HistoryMode::Disabled);
        assert_eq!(opts.write, WriteMode::InPlace);
        assert!(opts.dry_run);
        assert_eq!(opts.log.level, "debug");
    }
}
