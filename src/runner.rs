// src/runner.rs
use std::path::PathBuf;

use tracing::info;

use crate::{
    config::options::UpdateOptions,
    data::UpdateRequest,
    error::Result,
    file::{read_document, read_input, write_document},
    updater::update_document,
};

/// What one invocation did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub path: PathBuf,
    pub date: String,
    pub rendered: usize,
    pub dropped: usize,
    pub archived: Option<String>,
    /// False for dry runs and when the page already had this content.
    pub written: bool,
    /// New page text, kept only for dry runs.
    pub preview: Option<String>,
}

/// Input → request → page → transform → write.
///
/// Ordering is part of the contract: a bad payload fails before the page is
/// opened, and a bad page fails before anything is written.
pub fn run(opts: &UpdateOptions) -> Result<RunSummary> {
    let raw = read_input(&opts.input)?;
    let req = UpdateRequest::from_json(&raw)?;
    info!(date = %req.date, picks = req.picks.len(), "payload decoded");

    let before = read_document(&opts.document)?;
    let out = update_document(&before, &req, opts.history)?;

    let changed = out.changed(&before);
    let written = if opts.dry_run {
        false
    } else if changed {
        write_document(opts, &out.document)?;
        true
    } else {
        info!(path = %opts.document.display(), "page already up to date; not rewriting");
        false
    };

    Ok(RunSummary {
        path: opts.document.clone(),
        date: req.date,
        rendered: out.rendered,
        dropped: out.dropped,
        archived: out.archived,
        written,
        preview: opts.dry_run.then_some(out.document),
    })
}
