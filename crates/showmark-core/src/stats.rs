use once_cell::sync::Lazy;
use regex::Regex;

use crate::inline::{IMAGE_RE, LINK_RE};

static HEADING_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,6}\s").unwrap());
static FENCE_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^```").unwrap());

/// Structural counts over a raw Markdown source, computed without
/// rendering it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub word_count: usize,
    pub char_count: usize,
    pub line_count: usize,
    pub heading_count: usize,
    pub code_block_count: usize,
    pub link_count: usize,
}

/// Counts words, characters, lines, ATX heading lines, fenced code
/// blocks (fence-line pairs), and links. Image syntax is not counted as
/// a link.
pub fn compute_stats(source: &str) -> DocumentStats {
    let images = IMAGE_RE.find_iter(source).count();
    let bracket_pairs = LINK_RE.find_iter(source).count();
    DocumentStats {
        word_count: source.split_whitespace().count(),
        char_count: source.chars().count(),
        line_count: source.split('\n').count(),
        heading_count: HEADING_LINE_RE.find_iter(source).count(),
        code_block_count: FENCE_LINE_RE.find_iter(source).count() / 2,
        link_count: bracket_pairs.saturating_sub(images),
    }
}
