//! Markup normalization.
//!
//! Reduces raw page markup to a plain-text menu transcript: script and style
//! elements go away wholesale, remaining tags become line separators, and
//! lines are trimmed with blanks dropped.
//!
//! The whole pass is an ordered list of (pattern, replacement) rules applied
//! in sequence, so the behavior is easy to audit and extend.

use regex::Regex;
use std::sync::LazyLock;

/// Ordered markup-stripping rules. Closed script/style blocks are removed
/// before the unclosed-block rules so a malformed page degrades to a partial
/// transcript instead of an empty one.
static MARKUP_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap(), ""),
        (Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").unwrap(), ""),
        (Regex::new(r"(?is)<script\b[^>]*>.*\z").unwrap(), ""),
        (Regex::new(r"(?is)<style\b[^>]*>.*\z").unwrap(), ""),
        (Regex::new(r"(?s)<!--.*?-->").unwrap(), ""),
        (Regex::new(r"(?s)<[^>]+>").unwrap(), "\n"),
    ]
});

/// Common entities seen in menu pages. Deliberately short: `&lt;`/`&gt;` are
/// left encoded so a second normalization pass never re-interprets decoded
/// text as markup.
const ENTITY_RULES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

/// Normalize raw page markup into a plain-text transcript.
///
/// Idempotent: running the result through again is a no-op. Malformed markup
/// degrades to a partial or empty string rather than an error.
pub fn normalize_markup(markup: &str) -> String {
    let mut text = markup.to_string();
    for (pattern, replacement) in MARKUP_RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    for (entity, replacement) in ENTITY_RULES {
        text = text.replace(entity, replacement);
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_script_and_style_contents() {
        let markup = "<html><head><style>body { color: red; }</style>\
                      <script>var x = 1;</script></head>\
                      <body><h1>Lunch</h1><p>Pasta Bar</p></body></html>";
        let text = normalize_markup(markup);
        assert_eq!(text, "Lunch\nPasta Bar");
        assert!(!text.contains("color"));
        assert!(!text.contains("var x"));
    }

    #[test]
    fn test_case_insensitive_script_removal() {
        let markup = "<SCRIPT>alert('hi')</SCRIPT><p>Salad</p>";
        assert_eq!(normalize_markup(markup), "Salad");
    }

    #[test]
    fn test_unclosed_script_drops_to_end() {
        let markup = "<p>Soup of the day</p><script>var trailing = true;";
        assert_eq!(normalize_markup(markup), "Soup of the day");
    }

    #[test]
    fn test_collapses_whitespace_and_blank_lines() {
        let markup = "<div>  Grill Station  </div>\n\n\n<div>\n   Burgers\n</div>";
        assert_eq!(normalize_markup(markup), "Grill Station\nBurgers");
    }

    #[test]
    fn test_decodes_common_entities() {
        let markup = "<p>Mac &amp; Cheese</p><p>Chef&#39;s Choice</p>";
        assert_eq!(normalize_markup(markup), "Mac & Cheese\nChef's Choice");
    }

    #[test]
    fn test_idempotent_on_clean_text() {
        let markup = "<body><p>Station A: Pasta</p><p>Station B: Salad</p></body>";
        let once = normalize_markup(markup);
        let twice = normalize_markup(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_and_tag_only_input() {
        assert_eq!(normalize_markup(""), "");
        assert_eq!(normalize_markup("<div><span></span></div>"), "");
    }

    #[test]
    fn test_comments_removed() {
        let markup = "<p>Tacos</p><!-- hidden note --><p>Rice</p>";
        assert_eq!(normalize_markup(markup), "Tacos\nRice");
    }
}
