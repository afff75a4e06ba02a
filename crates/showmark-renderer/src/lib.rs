use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme as SyntectTheme, ThemeSet};
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::SyntaxSet;

const BASE_CSS: &str = include_str!("../assets/showmark.css");

#[derive(Debug, Clone, Copy)]
pub enum Theme {
    Auto,
    Light,
    Dark,
}

/// Wraps rendered HTML fragments into standalone pages: theme stylesheet,
/// document shell, and server-side code highlighting.
#[derive(Debug, Clone)]
pub struct Renderer {
    theme: Theme,
    custom_vars: BTreeMap<String, String>,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            custom_vars: BTreeMap::new(),
        }
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_vars.insert(key.into(), value.into());
        self
    }

    pub fn stylesheet(&self) -> String {
        let mut out = String::new();
        let (light_vars, dark_vars) = default_theme_vars();

        match self.theme {
            Theme::Auto => {
                out.push_str(&root_block(&light_vars, true));
                out.push_str("@media (prefers-color-scheme: dark) {\n");
                out.push_str(&indent_root_block(&dark_vars));
                out.push_str("}\n");
            }
            Theme::Light => {
                out.push_str(&root_block(&light_vars, true));
            }
            Theme::Dark => {
                out.push_str(&root_block(&dark_vars, true));
            }
        }

        if !self.custom_vars.is_empty() {
            out.push_str(&root_block(&self.custom_vars, false));
        }

        out.push_str(BASE_CSS);
        out
    }

    pub fn embed_html(&self, html: &str, with_inline_css: bool) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n");
        out.push_str("<html lang=\"en\">\n");
        out.push_str("<head>\n");
        out.push_str("  <meta charset=\"utf-8\" />\n");
        out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
        if with_inline_css {
            out.push_str("  <style>\n");
            out.push_str(&self.stylesheet());
            out.push_str("\n  </style>\n");
        }
        out.push_str("</head>\n");
        out.push_str("<body>\n");
        out.push_str(html);
        if !html.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("</body>\n");
        out.push_str("</html>\n");
        out
    }

    pub fn generate_files(&self, out_dir: &Path) -> io::Result<()> {
        fs::create_dir_all(out_dir)?;
        fs::write(out_dir.join("showmark.css"), self.stylesheet())?;
        Ok(())
    }

    /// Replaces the entity-escaped bodies of `<pre><code>` blocks in
    /// emitted HTML with syntect-highlighted markup. Blocks without a
    /// recognized `language-` class fall back to plain text; documents
    /// without code blocks pass through unchanged.
    pub fn highlight_html(&self, html: &str) -> String {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let theme_set = ThemeSet::load_defaults();
        let theme = pick_theme(self.theme, &theme_set);
        highlight_html_inner(html, &syntax_set, theme)
    }
}

fn default_theme_vars() -> (BTreeMap<String, String>, BTreeMap<String, String>) {
    let light = BTreeMap::from([
        ("--showmark-bg".to_string(), "#fdfdfb".to_string()),
        ("--showmark-fg".to_string(), "#22272e".to_string()),
        ("--showmark-muted".to_string(), "#636c76".to_string()),
        ("--showmark-border".to_string(), "#d4dbe2".to_string()),
        ("--showmark-accent".to_string(), "#2f6fab".to_string()),
        ("--showmark-code-bg".to_string(), "#f3f5f7".to_string()),
        ("--showmark-code-fg".to_string(), "#22272e".to_string()),
    ]);

    let dark = BTreeMap::from([
        ("--showmark-bg".to_string(), "#10141a".to_string()),
        ("--showmark-fg".to_string(), "#e8eef4".to_string()),
        ("--showmark-muted".to_string(), "#98a2ad".to_string()),
        ("--showmark-border".to_string(), "#2c343f".to_string()),
        ("--showmark-accent".to_string(), "#6cb2ef".to_string()),
        ("--showmark-code-bg".to_string(), "#1d2530".to_string()),
        ("--showmark-code-fg".to_string(), "#f2f7fc".to_string()),
    ]);

    (light, dark)
}

fn format_vars(vars: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for (key, value) in vars {
        out.push_str("  ");
        out.push_str(key);
        out.push_str(": ");
        out.push_str(value);
        out.push_str(";\n");
    }
    out
}

fn root_block(vars: &BTreeMap<String, String>, include_color_scheme: bool) -> String {
    let mut out = String::new();
    out.push_str(":root {\n");
    if include_color_scheme {
        out.push_str("  color-scheme: light dark;\n");
    }
    out.push_str(&format_vars(vars));
    out.push_str("}\n");
    out
}

fn indent_root_block(vars: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    out.push_str("  :root {\n");
    out.push_str("    color-scheme: light dark;\n");
    for (key, value) in vars {
        out.push_str("    ");
        out.push_str(key);
        out.push_str(": ");
        out.push_str(value);
        out.push_str(";\n");
    }
    out.push_str("  }\n");
    out
}

fn pick_theme(theme: Theme, theme_set: &ThemeSet) -> &SyntectTheme {
    let candidates = match theme {
        Theme::Dark => [
            "Monokai Extended Bright",
            "Monokai Extended",
            "base16-ocean.dark",
        ],
        Theme::Light | Theme::Auto => {
            ["InspiredGitHub", "Solarized (light)", "base16-ocean.light"]
        }
    };
    for name in candidates {
        if let Some(found) = theme_set.themes.get(name) {
            return found;
        }
    }
    theme_set
        .themes
        .values()
        .next()
        .expect("theme set has at least one theme")
}

fn highlight_html_inner(html: &str, syntax_set: &SyntaxSet, theme: &SyntectTheme) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    let open_tag = "<pre><code";
    let close_tag = "</code></pre>";

    while let Some(start) = rest.find(open_tag) {
        out.push_str(&rest[..start]);
        let after_start = &rest[start..];
        let end = match after_start.find(close_tag) {
            Some(index) => index + close_tag.len(),
            None => {
                out.push_str(after_start);
                return out;
            }
        };
        let block = &after_start[..end];
        out.push_str(&highlight_block(block, syntax_set, theme));
        rest = &after_start[end..];
    }

    out.push_str(rest);
    out
}

fn highlight_block(block: &str, syntax_set: &SyntaxSet, theme: &SyntectTheme) -> String {
    // `block` starts with "<pre><code"; the code tag's '>' is the first
    // one past that prefix.
    let prefix = "<pre><code".len();
    let code_tag_end = match block[prefix..].find('>') {
        Some(index) => prefix + index,
        None => return block.to_string(),
    };
    let body_end = match block.find("</code></pre>") {
        Some(index) => index,
        None => return block.to_string(),
    };
    let code_tag = &block[..code_tag_end + 1];
    let body = &block[code_tag_end + 1..body_end];

    let language = extract_language(code_tag);
    let syntax = language
        .as_deref()
        .and_then(|token| syntax_set.find_syntax_by_token(token))
        .unwrap_or_else(|| syntax_set.find_syntax_plain_text());

    let mut highlighter = HighlightLines::new(syntax, theme);
    let source = unescape_html_code(body);
    let mut lines = Vec::new();
    for line in source.split('\n') {
        lines.push(highlight_line(line, syntax_set, &mut highlighter));
    }

    let mut out = String::with_capacity(block.len());
    out.push_str(code_tag);
    out.push_str(&lines.join("\n"));
    out.push_str(&block[body_end..]);
    out
}

fn highlight_line(line: &str, syntax_set: &SyntaxSet, highlighter: &mut HighlightLines) -> String {
    match highlighter.highlight_line(line, syntax_set) {
        Ok(ranges) => match styled_line_to_highlighted_html(&ranges, IncludeBackground::No) {
            Ok(html) => html,
            Err(_) => escape_html_code(line),
        },
        Err(_) => escape_html_code(line),
    }
}

fn extract_language(code_tag: &str) -> Option<String> {
    let class_attr = extract_attr(code_tag, "class")?;
    for class_name in class_attr.split_whitespace() {
        if let Some(lang) = class_name.strip_prefix("language-") {
            if !lang.is_empty() {
                return Some(lang.to_string());
            }
        }
    }
    None
}

fn extract_attr(tag: &str, name: &str) -> Option<String> {
    let needle = format!("{}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let end = tag[start..].find('"')?;
    Some(tag[start..start + end].to_string())
}

fn escape_html_code(text: &str) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn unescape_html_code(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(stripped) = tail.strip_prefix("&amp;") {
            out.push('&');
            rest = stripped;
        } else if let Some(stripped) = tail.strip_prefix("&lt;") {
            out.push('<');
            rest = stripped;
        } else if let Some(stripped) = tail.strip_prefix("&gt;") {
            out.push('>');
            rest = stripped;
        } else if let Some(stripped) = tail.strip_prefix("&quot;") {
            out.push('"');
            rest = stripped;
        } else if let Some(stripped) = tail.strip_prefix("&#39;") {
            out.push('\'');
            rest = stripped;
        } else {
            out.push('&');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
