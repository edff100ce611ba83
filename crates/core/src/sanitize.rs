//! Text sanitization for user-supplied review and search fields.
//!
//! Both sanitizers strip HTML markup (dropping the contents of `<script>`
//! and `<style>` blocks entirely), remove control characters and trim.
//! [`sanitize_text_field`] flattens everything onto a single line, while
//! [`sanitize_textarea_field`] keeps paragraph breaks for free-text reviews.

use std::sync::LazyLock;

use regex::Regex;

/// `<script>` / `<style>` elements, including their contents.
static EMBEDDED_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("valid regex")
});

/// Any tag-like sequence. An unterminated tag runs to the end of input.
///
/// A `<` that is not followed by a letter, `/`, `!` or `?` (e.g. `a < b`, `<3`)
/// is ordinary text and left alone.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[a-zA-Z/!?][^>]*(?:>|$)").expect("valid regex"));

/// Remove markup from `raw`.
pub fn strip_tags(raw: &str) -> String {
    let without_blocks = EMBEDDED_BLOCK_RE.replace_all(raw, "");
    TAG_RE.replace_all(&without_blocks, "").into_owned()
}

/// Sanitize a single-line field (titles, names, ids, search queries).
///
/// Line breaks, tabs and runs of spaces collapse to one space.
pub fn sanitize_text_field(raw: &str) -> String {
    collapse_line(&strip_tags(raw))
}

/// Sanitize a multi-line field (review body).
///
/// Line endings are normalized to `\n`; each line is collapsed like a
/// single-line field. Leading and trailing blank lines are dropped.
pub fn sanitize_textarea_field(raw: &str) -> String {
    let stripped = strip_tags(raw);
    let normalized = stripped.replace("\r\n", "\n").replace('\r', "\n");

    let lines: Vec<String> = normalized.split('\n').map(collapse_line).collect();
    lines.join("\n").trim_matches('\n').to_string()
}

fn collapse_line(line: &str) -> String {
    line.split_whitespace()
        .map(|word| word.chars().filter(|c| !c.is_control()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
