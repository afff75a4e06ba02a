use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::escape::escape_html;

pub(crate) static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").unwrap());
pub(crate) static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").unwrap());
static CODE_SPAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static BOLD_ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
static BOLD_STAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static BOLD_UNDERSCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());
static ITALIC_STAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static ITALIC_UNDERSCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.+?)_").unwrap());
static STRIKETHROUGH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.+?)~~").unwrap());

// Rendered code spans are parked under this marker until the emphasis
// passes have run, so their bodies are never re-read as delimiters.
const STASH_MARK: char = '\u{1A}';

/// Applies the fixed sequence of inline substitution passes to the text
/// content of a single block. Pass order is the precedence: images before
/// links (shared bracket syntax), code spans before emphasis (backtick
/// bodies stay literal), bold before italic.
pub(crate) fn apply_inline(text: &str) -> String {
    let mut stash: Vec<String> = Vec::new();

    let mut out = IMAGE_RE
        .replace_all(text, |caps: &Captures| {
            format!(
                "<img src=\"{}\" alt=\"{}\">",
                escape_html(&caps[2]),
                escape_html(&caps[1])
            )
        })
        .into_owned();
    out = LINK_RE
        .replace_all(&out, |caps: &Captures| {
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                escape_html(&caps[2]),
                escape_html(&caps[1])
            )
        })
        .into_owned();
    out = CODE_SPAN_RE
        .replace_all(&out, |caps: &Captures| {
            let slot = stash.len();
            stash.push(format!("<code>{}</code>", escape_html(&caps[1])));
            format!("{STASH_MARK}{slot}{STASH_MARK}")
        })
        .into_owned();
    out = BOLD_ITALIC_RE
        .replace_all(&out, "<strong><em>$1</em></strong>")
        .into_owned();
    out = BOLD_STAR_RE.replace_all(&out, "<strong>$1</strong>").into_owned();
    out = BOLD_UNDERSCORE_RE
        .replace_all(&out, "<strong>$1</strong>")
        .into_owned();
    out = ITALIC_STAR_RE.replace_all(&out, "<em>$1</em>").into_owned();
    out = ITALIC_UNDERSCORE_RE.replace_all(&out, "<em>$1</em>").into_owned();
    out = STRIKETHROUGH_RE.replace_all(&out, "<del>$1</del>").into_owned();

    for (slot, rendered) in stash.iter().enumerate() {
        out = out.replace(&format!("{STASH_MARK}{slot}{STASH_MARK}"), rendered);
    }
    out
}
