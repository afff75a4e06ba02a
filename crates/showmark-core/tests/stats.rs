use showmark_core::compute_stats;

#[test]
fn empty_source() {
    let stats = compute_stats("");
    assert_eq!(stats.word_count, 0);
    assert_eq!(stats.char_count, 0);
    assert_eq!(stats.line_count, 1);
    assert_eq!(stats.heading_count, 0);
    assert_eq!(stats.code_block_count, 0);
    assert_eq!(stats.link_count, 0);
}

#[test]
fn plain_text_counts() {
    let stats = compute_stats("ab cd");
    assert_eq!(stats.word_count, 2);
    assert_eq!(stats.char_count, 5);
    assert_eq!(stats.line_count, 1);
}

#[test]
fn structural_counts_over_raw_source() {
    let stats = compute_stats("# h\n## hh\n[a](b)\n![c](d)\n```\nx\n```");
    assert_eq!(stats.heading_count, 2);
    assert_eq!(stats.link_count, 1);
    assert_eq!(stats.code_block_count, 1);
    assert_eq!(stats.line_count, 7);
    assert_eq!(stats.word_count, 9);
    assert_eq!(stats.char_count, 34);
}

#[test]
fn image_syntax_is_not_a_link() {
    assert_eq!(compute_stats("![only image](x.png)").link_count, 0);
    assert_eq!(compute_stats("[real](y) and ![img](x)").link_count, 1);
}

#[test]
fn unterminated_fence_counts_no_block() {
    assert_eq!(compute_stats("```\ncode").code_block_count, 0);
}

#[test]
fn seven_hashes_are_not_a_heading() {
    assert_eq!(compute_stats("####### nope").heading_count, 0);
}

#[test]
fn multibyte_chars_count_as_scalars() {
    let stats = compute_stats("héllo");
    assert_eq!(stats.char_count, 5);
    assert_eq!(stats.word_count, 1);
}
