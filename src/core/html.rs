// src/core/html.rs
//
// String-level helpers over the page. No HTML parsing: markers are located by
// plain substring search, and the few things read back out of a previously
// rendered block go through the named patterns below.

use std::fmt;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::consts::{ARCHIVED_LABEL, NO_HISTORY_PHRASE};

/// Escape `& < > " '` for text and attribute positions.
/// `&` goes first so nothing already produced gets escaped twice.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/* ---------------- Marker regions ---------------- */

/// Byte positions of one marker pair inside a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerSpan {
    /// Start of the begin marker.
    pub open: usize,
    /// Start of the end marker.
    pub close: usize,
    open_len: usize,
    close_len: usize,
}

impl MarkerSpan {
    /// Begin marker through end marker, both included.
    pub fn outer(&self) -> Range<usize> {
        self.open..self.close + self.close_len
    }

    /// Strictly between the two markers.
    pub fn inner(&self) -> Range<usize> {
        self.open + self.open_len..self.close
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerFault {
    MissingBegin,
    MissingEnd,
    EndBeforeBegin,
}

impl fmt::Display for MarkerFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerFault::MissingBegin => f.write_str("begin marker missing"),
            MarkerFault::MissingEnd => f.write_str("end marker missing"),
            MarkerFault::EndBeforeBegin => f.write_str("end marker precedes begin marker"),
        }
    }
}

/// First occurrence of `begin` and first occurrence of `end`.
/// The end marker must start after the begin marker is complete.
pub fn find_markers(doc: &str, begin: &str, end: &str) -> Result<MarkerSpan, MarkerFault> {
    let open = doc.find(begin).ok_or(MarkerFault::MissingBegin)?;
    let close = doc.find(end).ok_or(MarkerFault::MissingEnd)?;
    if close < open + begin.len() {
        return Err(MarkerFault::EndBeforeBegin);
    }
    Ok(MarkerSpan { open, close, open_len: begin.len(), close_len: end.len() })
}

/* ---------------- Patterns over a rendered block ---------------- */

// `Updated: <value>`; value runs to the next tag or line break.
static UPDATED_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Updated:\s*([^<\r\n]+)").expect("valid updated-label regex"));

// Non-greedy, may span lines.
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<li>.*?</li>").expect("valid list-item regex"));

static SUMMARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<summary>(.*?)</summary>").expect("valid summary regex"));

// The whole placeholder line, including the line break in front of it.
// Any single wrapping element counts: <div class="footer">, <p>, <li class=..>.
static NO_HISTORY_LINE: Lazy<Regex> = Lazy::new(|| {
    let phrase = regex::escape(NO_HISTORY_PHRASE).replace(' ', r"\s+");
    Regex::new(&format!(r#"\r?\n?[ \t]*<\w+[^>]*>\s*{phrase}\s*</\w+>[ \t]*"#))
        .expect("valid no-history regex")
});

/// Date label of a previously rendered daily block (first match, trimmed).
pub fn updated_label(block: &str) -> Option<&str> {
    UPDATED_LABEL
        .captures(block)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}

/// Every `<li>…</li>` element in document order, verbatim.
pub fn list_items(block: &str) -> Vec<&str> {
    LIST_ITEM.find_iter(block).map(|m| m.as_str()).collect()
}

/// Labels of the collapsible entries already in a history region,
/// with the archived tag stripped.
pub fn history_labels(inner: &str) -> Vec<&str> {
    SUMMARY
        .captures_iter(inner)
        .filter_map(|c| c.get(1))
        .map(|m| {
            let label = m.as_str().trim();
            label.strip_suffix(ARCHIVED_LABEL).unwrap_or(label).trim_end()
        })
        .collect()
}

/// Drop the "No history yet." line once, if present.
pub fn strip_no_history(inner: &str) -> String {
    NO_HISTORY_LINE.replacen(inner, 1, "").into_owned()
}

/// Prefix each item with `indent`; content is left as is.
pub fn reindent<'a, I>(items: I, indent: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    items.into_iter().map(|it| join!(indent, it)).collect()
}
