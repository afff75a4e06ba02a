/// A structurally distinct unit of Markdown spanning one or more source
/// lines. Text-bearing variants hold raw text; inline substitution is
/// applied by the emitter, never by the parser.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Paragraph {
        text: String,
    },
    Heading {
        level: u8,
        text: String,
    },
    BlockQuote {
        blocks: Vec<Block>,
    },
    List {
        ordered: bool,
        items: Vec<String>,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    CodeFence {
        lang: Option<String>,
        text: String,
    },
    ThematicBreak,
}
