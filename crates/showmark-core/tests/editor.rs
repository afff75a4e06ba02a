use showmark_core::insert_at_cursor;

#[test]
fn wraps_the_selection() {
    let splice = insert_at_cursor("hello world", 0, 5, "**", "**", "bold");
    assert_eq!(splice.text, "**hello** world");
    assert_eq!(splice.selection_start, 2);
    assert_eq!(splice.selection_end, 7);
}

#[test]
fn empty_selection_inserts_placeholder() {
    let splice = insert_at_cursor("ab", 1, 1, "*", "*", "text");
    assert_eq!(splice.text, "a*text*b");
    assert_eq!(splice.selection_start, 2);
    assert_eq!(splice.selection_end, 6);
}

#[test]
fn selection_at_end_of_text() {
    let splice = insert_at_cursor("note", 4, 4, "\n\n", "", "more");
    assert_eq!(splice.text, "note\n\nmore");
    assert_eq!(splice.selection_start, 6);
    assert_eq!(splice.selection_end, 10);
}

#[test]
fn out_of_range_indices_are_clamped() {
    let splice = insert_at_cursor("ab", 5, 9, "[", "]", "x");
    assert_eq!(splice.text, "ab[x]");
    assert_eq!(splice.selection_start, 3);
    assert_eq!(splice.selection_end, 4);
}

#[test]
fn inverted_range_collapses_to_cursor() {
    let splice = insert_at_cursor("abcd", 3, 1, "<", ">", "p");
    assert_eq!(splice.text, "a<p>bcd");
}

#[test]
fn non_boundary_index_is_clamped_not_panicking() {
    // U+00E9 is two bytes; offset 1 is inside it.
    let splice = insert_at_cursor("é", 1, 1, "_", "_", "p");
    assert_eq!(splice.text, "_p_é");
    assert_eq!(splice.selection_start, 1);
    assert_eq!(splice.selection_end, 2);
}
