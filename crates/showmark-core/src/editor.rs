/// Result of a toolbar-style wrap/insert edit: the new document text and
/// the selection covering the inserted content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Splice {
    pub text: String,
    pub selection_start: usize,
    pub selection_end: usize,
}

/// Wraps the selected span of `text` in `before`/`after`. An empty
/// selection inserts `placeholder` between the markers instead. Indices
/// are byte offsets; out-of-range or non-boundary values are clamped to
/// the nearest valid char boundary, so the function is total.
pub fn insert_at_cursor(
    text: &str,
    selection_start: usize,
    selection_end: usize,
    before: &str,
    after: &str,
    placeholder: &str,
) -> Splice {
    let end = clamp_to_boundary(text, selection_end);
    let start = clamp_to_boundary(text, selection_start.min(end));

    let selected = &text[start..end];
    let content = if selected.is_empty() {
        placeholder
    } else {
        selected
    };

    let mut out =
        String::with_capacity(text.len() + before.len() + content.len() + after.len());
    out.push_str(&text[..start]);
    out.push_str(before);
    out.push_str(content);
    out.push_str(after);
    out.push_str(&text[end..]);

    let selection_start = start + before.len();
    let selection_end = selection_start + content.len();
    Splice {
        text: out,
        selection_start,
        selection_end,
    }
}

fn clamp_to_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
