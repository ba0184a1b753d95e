// src/config/consts.rs

// Markers (exact tokens; part of the page contract)
pub const DAILY_BEGIN: &str = "<!-- BEGIN DAILY -->";
pub const DAILY_END: &str = "<!-- END DAILY -->";
pub const HISTORY_BEGIN: &str = "<!-- BEGIN HISTORY -->";
pub const HISTORY_END: &str = "<!-- END HISTORY -->";

// Render
pub const MAX_PICKS: usize = 5;
pub const URL_PLACEHOLDER: &str = "#";
pub const NO_PICKS_ITEM: &str = "<li><em>No picks today (yet).</em></li>";
pub const NO_PICKS_PHRASE: &str = "No picks today";
pub const FOOTER_RULE: &str =
    "Rule: small list; no fluff. If it feels like dashboard theater, it doesn\u{2019}t ship.";
pub const ARCHIVED_LABEL: &str = "<span class=\"tag\">archived</span>";
pub const NO_HISTORY_PHRASE: &str = "No history yet.";

// Indentation inside the page body
pub const INDENT_BLOCK: &str = "        ";
pub const INDENT_ITEM: &str = "          ";
pub const INDENT_ARCHIVED_ITEM: &str = "            ";

// Files
pub const DEFAULT_DOCUMENT: &str = "index.html";
pub const TMP_EXTENSION: &str = "tmp";

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "warn";
