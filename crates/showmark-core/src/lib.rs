mod ast;
mod editor;
mod emit;
mod escape;
mod inline;
mod parser;
mod stats;
mod templates;

pub use ast::Block;
pub use editor::{Splice, insert_at_cursor};
pub use emit::{emit_html, render, render_sanitized};
pub use parser::parse;
pub use stats::{DocumentStats, compute_stats};
pub use templates::{TEMPLATES, Template, template};
