use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static HYPHENATED_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{L})-[ \t]*\r?\n[ \t]*(\p{L})").unwrap());

/// Cleans raw page text: NFKC, rejoins words hyphenated across lines
/// (letters on both sides, so `n-\n1` keeps its minus), drops
/// control characters, collapses runs of blanks and blank lines.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw
        .nfkc()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();
    let rejoined = HYPHENATED_BREAK.replace_all(&normalized, "$1$2");

    let paragraphs: Vec<String> = rejoined
        .split("\n\n")
        .map(|block| {
            block
                .lines()
                .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .filter(|paragraph| !paragraph.is_empty())
        .collect();

    paragraphs.join("\n\n")
}

/// Sanitizes each page and joins the non-empty ones in order. `None` when no
/// page holds text.
pub fn join_pages(pages: Vec<String>) -> Option<String> {
    let cleaned: Vec<String> = pages
        .iter()
        .map(|page| sanitize_extracted_text(page))
        .filter(|page| !page.is_empty())
        .collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.join("\n\n"))
    }
}
