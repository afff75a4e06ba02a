use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use showmark_core::{
    DocumentStats, TEMPLATES, compute_stats, render, render_sanitized, template,
};
use showmark_renderer::{Renderer, Theme};

fn main() {
    let mut input: Option<String> = None;
    let mut sanitized = false;
    let mut page = false;
    let mut theme = Theme::Auto;
    let mut stats_mode: Option<StatsMode> = None;
    let mut sample: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--sanitized" => sanitized = true,
            "--page" => page = true,
            "--theme" => {
                theme = match args.next().as_deref() {
                    Some("light") => Theme::Light,
                    Some("dark") => Theme::Dark,
                    Some("auto") => Theme::Auto,
                    _ => {
                        eprintln!("--theme expects: light | dark | auto");
                        print_usage();
                        process::exit(2);
                    }
                };
            }
            "--stats" => {
                let mode = match args.next().as_deref() {
                    Some("json") => StatsMode::Json,
                    Some("pretty") => StatsMode::Pretty,
                    _ => {
                        eprintln!("--stats expects: json | pretty");
                        print_usage();
                        process::exit(2);
                    }
                };
                stats_mode = Some(mode);
            }
            "--sample" => match args.next() {
                Some(name) => sample = Some(name),
                None => {
                    eprintln!("--sample expects a template name");
                    print_usage();
                    process::exit(2);
                }
            },
            _ => {
                if input.is_none() {
                    input = Some(arg);
                } else {
                    eprintln!("unexpected argument: {}", arg);
                    print_usage();
                    process::exit(2);
                }
            }
        }
    }

    let source = match sample {
        Some(name) => match template(&name) {
            Some(found) => found.body.to_string(),
            None => {
                eprintln!("unknown template: {}", name);
                eprintln!("available templates:");
                for entry in TEMPLATES {
                    eprintln!("  {:<10} {}", entry.name, entry.title);
                }
                process::exit(2);
            }
        },
        None => match input {
            Some(path) => fs::read_to_string(&path).unwrap_or_else(|err| {
                eprintln!("failed to read {}: {}", path, err);
                process::exit(1);
            }),
            None => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .unwrap_or_else(|err| {
                        eprintln!("failed to read stdin: {}", err);
                        process::exit(1);
                    });
                buffer
            }
        },
    };

    if let Some(mode) = stats_mode {
        emit_stats(&compute_stats(&source), mode);
    }

    let fragment = if sanitized {
        render_sanitized(&source)
    } else {
        render(&source)
    };

    if page {
        let renderer = Renderer::new(theme);
        let highlighted = renderer.highlight_html(&fragment);
        print!("{}", renderer.embed_html(&highlighted, true));
    } else {
        println!("{}", fragment);
    }
}

fn print_usage() {
    eprintln!(
        "Usage: showmark-cli [--sanitized] [--page] [--theme light|dark|auto] [--stats json|pretty] [--sample NAME] [input]"
    );
}

#[derive(Clone, Copy)]
enum StatsMode {
    Json,
    Pretty,
}

fn emit_stats(stats: &DocumentStats, mode: StatsMode) {
    match mode {
        StatsMode::Json => eprintln!("{}", stats_to_json(stats)),
        StatsMode::Pretty => {
            eprintln!("words      {}", stats.word_count);
            eprintln!("chars      {}", stats.char_count);
            eprintln!("lines      {}", stats.line_count);
            eprintln!("headings   {}", stats.heading_count);
            eprintln!("code       {}", stats.code_block_count);
            eprintln!("links      {}", stats.link_count);
        }
    }
}

fn stats_to_json(stats: &DocumentStats) -> String {
    let mut out = String::new();
    out.push_str("{\n");
    out.push_str(&format!("  \"wordCount\": {},\n", stats.word_count));
    out.push_str(&format!("  \"charCount\": {},\n", stats.char_count));
    out.push_str(&format!("  \"lineCount\": {},\n", stats.line_count));
    out.push_str(&format!("  \"headingCount\": {},\n", stats.heading_count));
    out.push_str(&format!("  \"codeBlockCount\": {},\n", stats.code_block_count));
    out.push_str(&format!("  \"linkCount\": {}\n", stats.link_count));
    out.push('}');
    out
}
