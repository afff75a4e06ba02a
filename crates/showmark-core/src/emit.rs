use ammonia::Builder;
use std::collections::{HashMap, HashSet};

use crate::ast::Block;
use crate::escape::escape_html;
use crate::inline::apply_inline;
use crate::parser::parse;

/// Renders a Markdown source string to an HTML fragment.
///
/// Whitespace-only input (the empty string included) renders to the
/// empty string. Rendering is pure and deterministic: the same input
/// always produces byte-identical output.
pub fn render(source: &str) -> String {
    emit_html(&parse(source))
}

/// Renders a Markdown source string and cleans the result against an
/// allow-list of exactly the tags this emitter produces. Raw inline HTML
/// in the source passes through `render` untouched; hosts embedding the
/// output into a live document want this variant.
pub fn render_sanitized(source: &str) -> String {
    sanitize(&render(source))
}

/// Emits HTML from a slice of blocks.
pub fn emit_html(blocks: &[Block]) -> String {
    // Deterministic formatting: 2-space indentation and LF newlines.
    let mut writer = HtmlWriter::new();
    for block in blocks {
        emit_block(&mut writer, block);
    }
    writer.finish()
}

struct HtmlWriter {
    out: String,
    indent: usize,
}

impl HtmlWriter {
    fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
        }
    }

    fn line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn finish(mut self) -> String {
        if self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }
}

fn emit_block(writer: &mut HtmlWriter, block: &Block) {
    match block {
        Block::Paragraph { text } => {
            writer.line(&format!("<p>{}</p>", apply_inline(text)));
        }
        Block::Heading { level, text } => {
            writer.line(&format!("<h{}>{}</h{}>", level, apply_inline(text), level));
        }
        Block::ThematicBreak => writer.line("<hr />"),
        Block::CodeFence { lang, text } => {
            let class = lang
                .as_deref()
                .map(|tag| format!(" class=\"language-{}\"", escape_html(tag)))
                .unwrap_or_default();
            // Fence bodies are escaped verbatim; the inline pipeline
            // never sees them.
            writer.line(&format!(
                "<pre><code{}>{}</code></pre>",
                class,
                escape_html(text)
            ));
        }
        Block::BlockQuote { blocks } => {
            writer.line("<blockquote>");
            writer.indent += 1;
            for child in blocks {
                emit_block(writer, child);
            }
            writer.indent -= 1;
            writer.line("</blockquote>");
        }
        Block::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            writer.line(&format!("<{}>", tag));
            writer.indent += 1;
            for item in items {
                writer.line(&format!("<li>{}</li>", apply_inline(item)));
            }
            writer.indent -= 1;
            writer.line(&format!("</{}>", tag));
        }
        Block::Table { headers, rows } => {
            writer.line("<table>");
            writer.indent += 1;
            writer.line("<thead>");
            writer.indent += 1;
            emit_table_row(writer, headers, "th");
            writer.indent -= 1;
            writer.line("</thead>");
            writer.line("<tbody>");
            writer.indent += 1;
            for row in rows {
                emit_table_row(writer, row, "td");
            }
            writer.indent -= 1;
            writer.line("</tbody>");
            writer.indent -= 1;
            writer.line("</table>");
        }
    }
}

fn emit_table_row(writer: &mut HtmlWriter, cells: &[String], tag: &str) {
    writer.line("<tr>");
    writer.indent += 1;
    for cell in cells {
        writer.line(&format!("<{}>{}</{}>", tag, apply_inline(cell), tag));
    }
    writer.indent -= 1;
    writer.line("</tr>");
}

fn sanitize(html: &str) -> String {
    let tags: HashSet<&'static str> = [
        "a",
        "blockquote",
        "code",
        "del",
        "em",
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "hr",
        "img",
        "li",
        "ol",
        "p",
        "pre",
        "strong",
        "table",
        "tbody",
        "td",
        "th",
        "thead",
        "tr",
        "ul",
    ]
    .iter()
    .copied()
    .collect();

    // `class` survives so language tags stay on code elements. `rel` on
    // anchors is rewritten by ammonia's default link policy.
    let mut generic_attributes: HashSet<&'static str> = HashSet::new();
    generic_attributes.insert("class");

    let mut tag_attributes = HashMap::new();
    tag_attributes.insert("a", ["href", "target"].iter().copied().collect());
    tag_attributes.insert("img", ["alt", "src"].iter().copied().collect());

    Builder::new()
        .tags(tags)
        .generic_attributes(generic_attributes)
        .tag_attributes(tag_attributes)
        .clean(html)
        .to_string()
}
