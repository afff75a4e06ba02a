use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::Block;

static FENCE_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^```(\w*)\s*$").unwrap());
static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());
static THEMATIC_BREAK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t]*(?:(?:-[ \t]*){3,}|(?:\*[ \t]*){3,}|(?:_[ \t]*){3,})$").unwrap()
});
static UNORDERED_ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*+] (.*)$").unwrap());
static ORDERED_ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\. (.*)$").unwrap());
static TABLE_SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\|[-|:\s]+$").unwrap());

/// Parses a Markdown source string into a flat sequence of blocks.
///
/// The scanner walks the lines once, left to right. At each cursor
/// position the first matching rule wins: fenced code, thematic break,
/// heading, blockquote, unordered list, ordered list, table, blank,
/// paragraph. Every rule consumes at least one line, so the scan always
/// terminates.
pub fn parse(source: &str) -> Vec<Block> {
    let lines: Vec<&str> = source.split('\n').collect();
    parse_blocks(&lines)
}

fn parse_blocks(lines: &[&str]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if lines[i].trim().is_empty() {
            i += 1;
            continue;
        }
        if let Some((block, next)) = parse_code_fence(lines, i) {
            blocks.push(block);
            i = next;
            continue;
        }
        if let Some((block, next)) = parse_thematic_break(lines, i) {
            blocks.push(block);
            i = next;
            continue;
        }
        if let Some((block, next)) = parse_heading(lines, i) {
            blocks.push(block);
            i = next;
            continue;
        }
        if let Some((block, next)) = parse_block_quote(lines, i) {
            blocks.push(block);
            i = next;
            continue;
        }
        if let Some((block, next)) = parse_list(lines, i, &UNORDERED_ITEM_RE, false) {
            blocks.push(block);
            i = next;
            continue;
        }
        if let Some((block, next)) = parse_list(lines, i, &ORDERED_ITEM_RE, true) {
            blocks.push(block);
            i = next;
            continue;
        }
        if let Some((block, next)) = parse_table(lines, i) {
            blocks.push(block);
            i = next;
            continue;
        }
        let (block, next) = parse_paragraph(lines, i);
        blocks.push(block);
        i = next;
    }

    blocks
}

fn parse_code_fence(lines: &[&str], start: usize) -> Option<(Block, usize)> {
    let caps = FENCE_OPEN_RE.captures(lines[start])?;
    let tag = caps.get(1).map_or("", |m| m.as_str());
    let lang = if tag.is_empty() {
        None
    } else {
        Some(tag.to_string())
    };

    let mut body: Vec<&str> = Vec::new();
    let mut i = start + 1;
    while i < lines.len() {
        if lines[i].starts_with("```") {
            i += 1;
            break;
        }
        body.push(lines[i]);
        i += 1;
    }
    // An unterminated fence consumes to end of input.
    Some((
        Block::CodeFence {
            lang,
            text: body.join("\n"),
        },
        i,
    ))
}

fn parse_thematic_break(lines: &[&str], start: usize) -> Option<(Block, usize)> {
    if !THEMATIC_BREAK_RE.is_match(lines[start]) {
        return None;
    }
    Some((Block::ThematicBreak, start + 1))
}

fn parse_heading(lines: &[&str], start: usize) -> Option<(Block, usize)> {
    let caps = HEADING_RE.captures(lines[start])?;
    let level = caps[1].len() as u8;
    Some((
        Block::Heading {
            level,
            text: caps[2].trim().to_string(),
        },
        start + 1,
    ))
}

fn parse_block_quote(lines: &[&str], start: usize) -> Option<(Block, usize)> {
    if !lines[start].starts_with('>') {
        return None;
    }
    let mut inner: Vec<String> = Vec::new();
    let mut i = start;
    while i < lines.len() && lines[i].starts_with('>') {
        let rest = &lines[i][1..];
        inner.push(rest.strip_prefix(' ').unwrap_or(rest).to_string());
        i += 1;
    }
    // Quote content re-enters the block scanner, so quotes may contain
    // any block type, including further quotes.
    let refs: Vec<&str> = inner.iter().map(String::as_str).collect();
    Some((
        Block::BlockQuote {
            blocks: parse_blocks(&refs),
        },
        i,
    ))
}

fn parse_list(
    lines: &[&str],
    start: usize,
    item_re: &Regex,
    ordered: bool,
) -> Option<(Block, usize)> {
    item_re.captures(lines[start])?;
    let mut items = Vec::new();
    let mut i = start;
    while i < lines.len() {
        match item_re.captures(lines[i]) {
            Some(caps) => {
                items.push(caps[1].to_string());
                i += 1;
            }
            // Any non-matching line, blank lines included, ends the list.
            None => break,
        }
    }
    Some((Block::List { ordered, items }, i))
}

fn parse_table(lines: &[&str], start: usize) -> Option<(Block, usize)> {
    if !is_table_start(lines, start) {
        return None;
    }
    let headers = split_table_row(lines[start]);
    let mut rows = Vec::new();
    let mut i = start + 2;
    while i < lines.len() && lines[i].starts_with('|') {
        rows.push(split_table_row(lines[i]));
        i += 1;
    }
    Some((Block::Table { headers, rows }, i))
}

fn is_table_start(lines: &[&str], i: usize) -> bool {
    lines[i].starts_with('|')
        && lines
            .get(i + 1)
            .is_some_and(|next| TABLE_SEPARATOR_RE.is_match(next))
}

fn split_table_row(line: &str) -> Vec<String> {
    let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
    if cells.first().is_some_and(|cell| cell.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|cell| cell.is_empty()) {
        cells.pop();
    }
    cells.into_iter().map(str::to_string).collect()
}

fn parse_paragraph(lines: &[&str], start: usize) -> (Block, usize) {
    let mut collected: Vec<&str> = Vec::new();
    let mut i = start;
    while i < lines.len() {
        let line = lines[i];
        // A paragraph is interrupted by the start of any other block
        // type, not only by blank lines. The first line is always
        // consumed: nothing else matched it.
        if i > start && (line.trim().is_empty() || is_block_start(lines, i)) {
            break;
        }
        collected.push(line);
        i += 1;
    }
    (
        Block::Paragraph {
            text: collected.join(" "),
        },
        i,
    )
}

fn is_block_start(lines: &[&str], i: usize) -> bool {
    let line = lines[i];
    FENCE_OPEN_RE.is_match(line)
        || THEMATIC_BREAK_RE.is_match(line)
        || HEADING_RE.is_match(line)
        || line.starts_with('>')
        || UNORDERED_ITEM_RE.is_match(line)
        || ORDERED_ITEM_RE.is_match(line)
        || is_table_start(lines, i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_interrupted_by_heading() {
        let blocks = parse("one\ntwo\n# three");
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0],
            Block::Paragraph {
                text: "one two".to_string()
            }
        );
    }

    #[test]
    fn seven_hashes_is_a_paragraph() {
        let blocks = parse("####### too many");
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                text: "####### too many".to_string()
            }]
        );
    }

    #[test]
    fn unterminated_fence_consumes_to_end() {
        let blocks = parse("```rust\nlet x = 1;\nlet y = 2;");
        assert_eq!(
            blocks,
            vec![Block::CodeFence {
                lang: Some("rust".to_string()),
                text: "let x = 1;\nlet y = 2;".to_string()
            }]
        );
    }

    #[test]
    fn ordered_list_discards_source_numbering() {
        let blocks = parse("3. a\n9. b");
        assert_eq!(
            blocks,
            vec![Block::List {
                ordered: true,
                items: vec!["a".to_string(), "b".to_string()]
            }]
        );
    }

    #[test]
    fn pipe_line_without_separator_is_a_paragraph() {
        let blocks = parse("| not a table");
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                text: "| not a table".to_string()
            }]
        );
    }

    #[test]
    fn rule_beats_unordered_list_marker() {
        let blocks = parse("- - -");
        assert_eq!(blocks, vec![Block::ThematicBreak]);
    }
}
