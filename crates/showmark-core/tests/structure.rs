use showmark_core::render;

fn count_tags(doc: &roxmltree::Document, tag: &str) -> usize {
    doc.descendants()
        .filter(|node| node.has_tag_name(tag))
        .count()
}

#[test]
fn table_has_one_head_one_body() {
    let html = render("| A | B |\n|---|---|\n| 1 | 2 |");
    let doc = roxmltree::Document::parse(&html).expect("well-formed table markup");
    assert_eq!(count_tags(&doc, "thead"), 1);
    assert_eq!(count_tags(&doc, "tbody"), 1);
    assert_eq!(count_tags(&doc, "th"), 2);
    assert_eq!(count_tags(&doc, "td"), 2);
}

#[test]
fn table_rows_may_be_short() {
    let html = render("| A | B | C |\n|---|---|---|\n| only |");
    let doc = roxmltree::Document::parse(&html).expect("well-formed table markup");
    assert_eq!(count_tags(&doc, "th"), 3);
    assert_eq!(count_tags(&doc, "td"), 1);
}

#[test]
fn table_ends_at_first_non_pipe_line() {
    let html = render("| A |\n|---|\n| 1 |\nplain text");
    assert!(html.contains("<table>"));
    assert!(html.contains("<p>plain text</p>"));
}

#[test]
fn header_cells_pass_through_inline_pipeline() {
    let html = render("| **A** | `b` |\n| --- | --- |");
    let doc = roxmltree::Document::parse(&html).expect("well-formed table markup");
    assert_eq!(count_tags(&doc, "strong"), 1);
    assert_eq!(count_tags(&doc, "code"), 1);
    assert_eq!(count_tags(&doc, "td"), 0);
}

#[test]
fn interior_empty_cells_are_kept() {
    let html = render("| a |  | c |\n|---|---|---|");
    let doc = roxmltree::Document::parse(&html).expect("well-formed table markup");
    assert_eq!(count_tags(&doc, "th"), 3);
}

#[test]
fn blockquote_wraps_nested_structure() {
    let html = render("> # Title\n> - item");
    let doc = roxmltree::Document::parse(&html).expect("well-formed quote markup");
    let quote = doc
        .descendants()
        .find(|node| node.has_tag_name("blockquote"))
        .expect("blockquote present");
    assert!(quote.descendants().any(|node| node.has_tag_name("h1")));
    assert!(quote.descendants().any(|node| node.has_tag_name("li")));
}
