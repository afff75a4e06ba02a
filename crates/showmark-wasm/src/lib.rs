use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStats {
    word_count: usize,
    char_count: usize,
    line_count: usize,
    heading_count: usize,
    code_block_count: usize,
    link_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsDocument {
    html: String,
    stats: JsStats,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSplice {
    text: String,
    selection_start: usize,
    selection_end: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTemplate {
    name: String,
    title: String,
    body: String,
}

impl From<showmark_core::DocumentStats> for JsStats {
    fn from(stats: showmark_core::DocumentStats) -> Self {
        Self {
            word_count: stats.word_count,
            char_count: stats.char_count,
            line_count: stats.line_count,
            heading_count: stats.heading_count,
            code_block_count: stats.code_block_count,
            link_count: stats.link_count,
        }
    }
}

#[wasm_bindgen]
pub fn render_html(source: &str) -> String {
    showmark_core::render(source)
}

#[wasm_bindgen]
pub fn render_html_sanitized(source: &str) -> String {
    showmark_core::render_sanitized(source)
}

/// Renders a document and returns `{html, stats}` in one call, so editor
/// hosts can refresh the preview and the status bar together.
#[wasm_bindgen]
pub fn render_document(source: &str) -> Result<JsValue, JsValue> {
    let document = JsDocument {
        html: showmark_core::render(source),
        stats: showmark_core::compute_stats(source).into(),
    };
    serde_wasm_bindgen::to_value(&document).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen]
pub fn document_stats(source: &str) -> Result<JsValue, JsValue> {
    let stats: JsStats = showmark_core::compute_stats(source).into();
    serde_wasm_bindgen::to_value(&stats).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Toolbar wrap/insert: returns `{text, selectionStart, selectionEnd}`
/// for the host to write back into its textarea.
#[wasm_bindgen]
pub fn splice_at_cursor(
    text: &str,
    selection_start: usize,
    selection_end: usize,
    before: &str,
    after: &str,
    placeholder: &str,
) -> Result<JsValue, JsValue> {
    let splice = showmark_core::insert_at_cursor(
        text,
        selection_start,
        selection_end,
        before,
        after,
        placeholder,
    );
    let out = JsSplice {
        text: splice.text,
        selection_start: splice.selection_start,
        selection_end: splice.selection_end,
    };
    serde_wasm_bindgen::to_value(&out).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen]
pub fn templates() -> Result<JsValue, JsValue> {
    let entries: Vec<JsTemplate> = showmark_core::TEMPLATES
        .iter()
        .map(|entry| JsTemplate {
            name: entry.name.to_string(),
            title: entry.title.to_string(),
            body: entry.body.to_string(),
        })
        .collect();
    serde_wasm_bindgen::to_value(&entries).map_err(|err| JsValue::from_str(&err.to_string()))
}
