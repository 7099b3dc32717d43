//! Turns the instructions blob of a recipe into an ordered list of steps.
//!
//! The API returns instructions either as an HTML fragment with list markup
//! or as loosely tagged prose. List items are preferred; prose is split into
//! sentences.

use log::debug;
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<li>(.*?)</li>").expect("list item regex is valid"));

#[allow(clippy::expect_used)]
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<]+?>").expect("tag regex is valid"));

// The regex crate has no lookbehind, so the punctuation is part of the match
// and re-attached to the preceding sentence when splitting.
#[allow(clippy::expect_used)]
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.?!]\s+").expect("sentence end regex is valid"));

/// Extract ordered, trimmed, non-empty steps from recipe instructions.
///
/// `<li>` items win when present, even if all of them are blank. Otherwise
/// all tags are stripped and the text is split after every `.`, `?` or `!`
/// that is followed by whitespace.
/// Entities are left as-is; decoding is a display concern.
pub fn extract_steps(instructions: Option<&str>) -> Vec<String> {
    let html = match instructions {
        Some(html) if !html.is_empty() => html,
        _ => return Vec::new(),
    };

    let mut found_items = false;
    let items: Vec<String> = LIST_ITEM
        .captures_iter(html)
        .inspect(|_| found_items = true)
        .map(|caps| strip_tags(&caps[1]).trim().to_string())
        .filter(|step| !step.is_empty())
        .collect();

    if found_items {
        debug!("Extracted {} steps from list items", items.len());
        return items;
    }

    let sentences = split_sentences(&strip_tags(html));
    debug!("Extracted {} steps from plain text", sentences.len());
    sentences
}

/// Remove anything shaped like a tag. Not an HTML parser: nesting and
/// attributes containing `>` are not understood.
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_END.find_iter(text) {
        // punctuation is a single ASCII byte
        push_trimmed(&mut sentences, &text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed(out: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        out.push(fragment.to_string());
    }
}
