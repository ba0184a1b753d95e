// src/updater.rs
//
// The page transform. Pure: text in, text out. Reading and writing the file
// happen in `runner`/`file`, never here.

use tracing::{debug, info};

pub use crate::config::options::HistoryMode;
use crate::config::consts::*;
use crate::core::html::{
    MarkerSpan, escape_html, find_markers, history_labels, list_items, strip_no_history,
    updated_label,
};
use crate::data::UpdateRequest;
use crate::error::{Region, Result, UpdateError};
use crate::render::{render_daily_block, render_history_entry};

/// New page text plus what happened to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transformed {
    pub document: String,
    /// Picks written into the daily region.
    pub rendered: usize,
    /// Picks dropped past the limit.
    pub dropped: usize,
    /// Date label of the block moved into history, if any.
    pub archived: Option<String>,
}

impl Transformed {
    pub fn changed(&self, before: &str) -> bool {
        self.document != before
    }
}

/// What was read back out of the daily block being replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outgoing<'a> {
    pub label: Option<&'a str>,
    pub items: Vec<&'a str>,
}

impl<'a> Outgoing<'a> {
    pub fn read(block: &'a str) -> Self {
        Self { label: updated_label(block), items: list_items(block) }
    }

    /// At least one item is not the no-picks placeholder.
    pub fn has_real_picks(&self) -> bool {
        self.items.iter().any(|it| !it.contains(NO_PICKS_PHRASE))
    }
}

/// Replace the daily region with `req` and, in `Archive` mode, move the
/// outgoing block into history when it is a previous day's real list that
/// history does not already hold.
pub fn update_document(doc: &str, req: &UpdateRequest, mode: HistoryMode) -> Result<Transformed> {
    let daily = locate(doc, Region::Daily, DAILY_BEGIN, DAILY_END)?;
    let block = render_daily_block(&req.date, &req.picks);

    let rendered = req.picks.len().min(MAX_PICKS);
    let dropped = req.picks.len().saturating_sub(MAX_PICKS);
    if dropped > 0 {
        debug!(dropped, "extra picks ignored");
    }

    let (document, archived) = match mode {
        HistoryMode::Disabled => {
            let d = daily.outer();
            (join!(&doc[..d.start], &block, &doc[d.end..]), None)
        }
        HistoryMode::Archive => with_history(doc, daily, &block, &escape_html(&req.date))?,
    };

    Ok(Transformed { document, rendered, dropped, archived })
}

fn with_history(
    doc: &str,
    daily: MarkerSpan,
    block: &str,
    today: &str,
) -> Result<(String, Option<String>)> {
    let history = locate(doc, Region::History, HISTORY_BEGIN, HISTORY_END)?;
    let d = daily.outer();
    if history.open < d.end {
        return Err(UpdateError::structural(
            Region::History,
            "history region must come after the daily region",
        ));
    }

    let outgoing = Outgoing::read(&doc[d.clone()]);
    let inner = &doc[history.inner()];

    let archived = archive_label(&outgoing, today, inner);
    let new_inner = match archived {
        Some(label) => {
            info!(label, items = outgoing.items.len(), "archiving previous picks");
            let entry = render_history_entry(label, &outgoing.items);
            join!("\n", &entry, &strip_no_history(inner))
        }
        None => s!(inner),
    };

    let h = history.outer();
    let document = join!(
        &doc[..d.start],
        block,
        &doc[d.end..h.start],
        HISTORY_BEGIN,
        &new_inner,
        HISTORY_END,
        &doc[h.end..],
    );
    Ok((document, archived.map(String::from)))
}

/// The outgoing label, when the block should be archived.
fn archive_label<'a>(outgoing: &Outgoing<'a>, today: &str, history_inner: &str) -> Option<&'a str> {
    let Some(label) = outgoing.label else {
        debug!("outgoing block has no date; not archiving");
        return None;
    };
    if label == today {
        debug!(label, "outgoing block is today's; not archiving");
        return None;
    }
    if !outgoing.has_real_picks() {
        debug!(label, "outgoing block has no picks; not archiving");
        return None;
    }
    if history_labels(history_inner).contains(&label) {
        debug!(label, "already in history; not archiving");
        return None;
    }
    Some(label)
}

fn locate(doc: &str, region: Region, begin: &str, end: &str) -> Result<MarkerSpan> {
    find_markers(doc, begin, end).map_err(|fault| UpdateError::structural(region, fault.to_string()))
}
