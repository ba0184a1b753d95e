// src/render.rs
//
// Fixed-shape fragments written into the page. Inputs are escaped here
// (daily block) or are already-escaped HTML copied from the page (history).

use crate::config::consts::*;
use crate::core::html::{escape_html, reindent};
use crate::core::sanitize::{DisplayPick, normalize_pick};
use crate::data::Pick;

/// One `<li>` for a normalized pick.
pub fn render_item(p: &DisplayPick) -> String {
    let tag = match &p.tag {
        Some(t) => format!(" <span class=\"tag\">{t}</span>"),
        None => s!(),
    };
    format!(
        "{INDENT_ITEM}<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>{tag}</li>",
        p.href, p.title
    )
}

/// The whole daily region, both markers included.
/// At most `MAX_PICKS` picks are rendered; the rest are ignored.
pub fn render_daily_block(date: &str, picks: &[Pick]) -> String {
    let mut items: Vec<String> = picks
        .iter()
        .take(MAX_PICKS)
        .map(|p| render_item(&normalize_pick(p)))
        .collect();
    if items.is_empty() {
        items.push(join!(INDENT_ITEM, NO_PICKS_ITEM));
    }

    let updated = format!("{INDENT_BLOCK}<div class=\"footer\">Updated: {}</div>", escape_html(date));
    let footer = format!("{INDENT_BLOCK}<div class=\"footer\">{FOOTER_RULE}</div>");

    lines!(
        DAILY_BEGIN,
        updated,
        join!(INDENT_BLOCK, "<ul>"),
        items.join("\n"),
        join!(INDENT_BLOCK, "</ul>"),
        footer,
        join!(INDENT_BLOCK, DAILY_END),
    )
}

/// A collapsible history entry. `label` and `items` are taken from a block
/// this tool rendered earlier and are written back without escaping.
/// Starts with a newline, has no trailing one.
pub fn render_history_entry(label: &str, items: &[&str]) -> String {
    let inner = reindent(items.iter().copied(), INDENT_ARCHIVED_ITEM);
    let mut out = lines!(
        "",
        join!(INDENT_BLOCK, "<details>"),
        format!("{INDENT_ITEM}<summary>{label} {ARCHIVED_LABEL}</summary>"),
        join!(INDENT_ITEM, "<ul>"),
    );
    for it in &inner {
        out.push('\n');
        out.push_str(it);
    }
    out.push('\n');
    out.push_str(&lines!(join!(INDENT_ITEM, "</ul>"), join!(INDENT_BLOCK, "</details>")));
    out
}
