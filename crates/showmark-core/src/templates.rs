/// A built-in sample document offered by editor front ends.
#[derive(Clone, Copy, Debug)]
pub struct Template {
    pub name: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const TEMPLATES: &[Template] = &[
    Template {
        name: "welcome",
        title: "Welcome tour",
        body: r#"# Welcome

This editor renders **Markdown** as you type.

- Headings, lists, and quotes
- Tables and fenced code
- Inline `code`, *emphasis*, and [links](https://example.com)

> Select some text and use the toolbar to wrap it.

---

Happy writing!
"#,
    },
    Template {
        name: "notes",
        title: "Meeting notes",
        body: r#"# Weekly sync

## Attendance

| Name | Present |
| --- | --- |
| Ada | yes |
| Grace | yes |

## Action items

1. Publish the release notes
2. Review the ~~old~~ updated roadmap
3. File the follow-up ticket

> Decisions recorded here are final until the next sync.
"#,
    },
    Template {
        name: "snippet",
        title: "Code snippet",
        body: r#"# Snippet

A fenced block keeps its contents verbatim:

```rust
fn main() {
    println!("1 < 2");
}
```

Inline spans like `let x = 1;` stay literal too.
"#,
    },
];

/// Looks up a built-in template by name.
pub fn template(name: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|template| template.name == name)
}
