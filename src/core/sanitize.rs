// src/core/sanitize.rs

use crate::config::consts::URL_PLACEHOLDER;
use crate::core::html::escape_html;
use crate::data::Pick;

/// A pick with every fallback applied and every field escaped,
/// ready to drop into the list template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayPick {
    pub title: String,
    pub href: String,
    pub tag: Option<String>,
}

/// The only place pick defaults are decided:
/// - href: url, else `#`
/// - title: title, else url, else the resolved href
/// - tag: omitted when absent
pub fn normalize_pick(p: &Pick) -> DisplayPick {
    let href = non_empty(p.url.as_deref()).unwrap_or(URL_PLACEHOLDER);
    let title = non_empty(p.title.as_deref())
        .or_else(|| non_empty(p.url.as_deref()))
        .unwrap_or(href);
    let tag = non_empty(p.tag.as_deref()).map(escape_html);

    DisplayPick { title: escape_html(title), href: escape_html(href), tag }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(title: Option<&str>, url: Option<&str>, tag: Option<&str>) -> Pick {
        Pick {
            title: title.map(String::from),
            url: url.map(String::from),
            tag: tag.map(String::from),
        }
    }

    #[test]
    fn title_falls_back_to_url() {
        let d = normalize_pick(&pick(None, Some("http://x"), None));
        assert_eq!(d.title, "http://x");
        assert_eq!(d.href, "http://x");
        assert_eq!(d.tag, None);
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let d = normalize_pick(&pick(Some(""), Some("http://x"), Some("")));
        assert_eq!(d.title, "http://x");
        assert_eq!(d.tag, None);
    }

    #[test]
    fn nothing_given_uses_placeholder_href() {
        let d = normalize_pick(&Pick::default());
        assert_eq!(d.href, "#");
        assert_eq!(d.title, "#");
    }

    #[test]
    fn all_fields_escaped() {
        let d = normalize_pick(&pick(Some("A&B"), Some("http://x/?a=1&b=\"2\""), Some("<new>")));
        assert_eq!(d.title, "A&amp;B");
        assert_eq!(d.href, "http://x/?a=1&amp;b=&quot;2&quot;");
        assert_eq!(d.tag.as_deref(), Some("&lt;new&gt;"));
    }
}
