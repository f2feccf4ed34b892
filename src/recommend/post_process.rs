//! Response post-processing.
//!
//! Cleans raw model output (disclaimer phrases, capitalization, terminal
//! punctuation) and reconciles the combined multi-chunk answer by dropping
//! repeated lines.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Ordered (pattern, replacement) cleanup rules applied to every raw
/// response before any other normalization.
static CLEANUP_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![(
        Regex::new(r"As an AI assistant,|As an AI,").unwrap(),
        "",
    )]
});

/// Clean a raw completion response.
///
/// Strips self-referential AI disclaimers, trims whitespace, uppercases the
/// first letter, and guarantees the text ends with `.`, `!`, or `?`.
pub fn process_response(raw: &str) -> String {
    let mut text = raw.to_string();
    for (pattern, replacement) in CLEANUP_RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }

    let text = text.trim();
    let mut result = capitalize_first(text);

    if !result.is_empty() && !result.ends_with(['.', '!', '?']) {
        result.push('.');
    }

    result
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Keep only the first occurrence of each distinct line, order preserved.
pub fn remove_duplicate_lines(text: &str) -> String {
    let mut seen = HashSet::new();
    let mut unique_lines = Vec::new();
    for line in text.split('\n') {
        if seen.insert(line) {
            unique_lines.push(line);
        }
    }
    unique_lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_period_when_missing() {
        assert_eq!(process_response("try the pasta"), "Try the pasta.");
    }

    #[test]
    fn test_keeps_existing_terminal_punctuation() {
        assert_eq!(process_response("Try the pasta!"), "Try the pasta!");
        assert_eq!(process_response("Pasta today?"), "Pasta today?");
        assert_eq!(process_response("Try the pasta."), "Try the pasta.");
    }

    #[test]
    fn test_strips_ai_disclaimers() {
        let raw = "As an AI assistant, I recommend the salad bar.";
        assert_eq!(process_response(raw), "I recommend the salad bar.");

        let raw = "As an AI, I'd suggest the grill.";
        assert_eq!(process_response(raw), "I'd suggest the grill.");
    }

    #[test]
    fn test_capitalizes_first_letter_only() {
        assert_eq!(
            process_response("the Verdant & Vegan station has tofu"),
            "The Verdant & Vegan station has tofu."
        );
    }

    #[test]
    fn test_empty_response_stays_empty() {
        assert_eq!(process_response(""), "");
        assert_eq!(process_response("   "), "");
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_in_order() {
        let text = "alpha\nbeta\nalpha\ngamma\nbeta";
        assert_eq!(remove_duplicate_lines(text), "alpha\nbeta\ngamma");
    }

    #[test]
    fn test_dedup_preserves_unique_text() {
        let text = "one\ntwo\nthree";
        assert_eq!(remove_duplicate_lines(text), text);
    }

    #[test]
    fn test_dedup_collapses_repeated_blank_lines() {
        let text = "a\n\nb\n\nc";
        assert_eq!(remove_duplicate_lines(text), "a\n\nb\nc");
    }
}
