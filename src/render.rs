// Terminal rendering: the model's markdown answer and the message area.
//
// Only markup is interpreted (bold, italics, headings, lists, code blocks,
// rules). The text itself is printed exactly as the model wrote it.

use crossterm::style::{style, Stylize};
use pulldown_cmark::{Event, Parser, Tag};

/// Footer printed under every answer.
pub const DISCLAIMER: &str = "Remember: CrystalIA's predictions are for entertainment only and should not be taken seriously. Happy Halloween!";

const RULE: &str = "────────────────────────────────────────";

/// Render `text` for the terminal. With `styled == false` the markup is
/// dropped but no ANSI codes are emitted (useful when stdout is not a tty).
pub fn render_markdown(text: &str, styled: bool) -> String {
    let mut out = String::new();
    let mut bold = 0usize;
    let mut italic = 0usize;
    // Numbering for ordered lists, `None` for bullets.
    let mut lists: Vec<Option<u64>> = Vec::new();

    for event in Parser::new(text) {
        match event {
            Event::Start(Tag::Strong) | Event::Start(Tag::Heading(..)) => bold += 1,
            Event::End(Tag::Strong) => bold = bold.saturating_sub(1),
            Event::End(Tag::Heading(..)) => {
                bold = bold.saturating_sub(1);
                out.push_str("\n\n");
            }
            Event::Start(Tag::Emphasis) => italic += 1,
            Event::End(Tag::Emphasis) => italic = italic.saturating_sub(1),
            Event::End(Tag::Paragraph) => {
                if lists.is_empty() {
                    out.push_str("\n\n");
                }
            }
            Event::End(Tag::CodeBlock(_)) => out.push('\n'),
            Event::Start(Tag::List(start)) => lists.push(start),
            Event::End(Tag::List(_)) => {
                lists.pop();
                if lists.is_empty() {
                    out.push('\n');
                }
            }
            Event::Start(Tag::Item) => {
                // A nested list starts before its parent item ends.
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                let depth = lists.len().saturating_sub(1);
                out.push_str(&"  ".repeat(depth));
                match lists.last_mut() {
                    Some(Some(n)) => {
                        out.push_str(&format!("{}. ", n));
                        *n += 1;
                    }
                    _ => out.push_str("• "),
                }
            }
            Event::End(Tag::Item) => {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            Event::Text(t) | Event::Code(t) => {
                push_styled(&mut out, &t, bold > 0, italic > 0, styled)
            }
            Event::Html(t) => out.push_str(&t),
            Event::SoftBreak => out.push(' '),
            Event::HardBreak => out.push('\n'),
            Event::Rule => {
                out.push_str(RULE);
                out.push_str("\n\n");
            }
            _ => {}
        }
    }

    out.trim_end().to_string()
}

fn push_styled(out: &mut String, text: &str, bold: bool, italic: bool, styled: bool) {
    if !styled || (!bold && !italic) {
        out.push_str(text);
        return;
    }
    let mut s = style(text);
    if bold {
        s = s.bold();
    }
    if italic {
        s = s.italic();
    }
    out.push_str(&s.to_string());
}

pub fn warning(msg: &str) -> String {
    format!("{} {}", "⚠".yellow().bold(), msg.yellow())
}

pub fn info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue().bold(), msg)
}

pub fn error(msg: &str) -> String {
    format!("{} {}", "✖".red().bold(), msg.red())
}

/// Message shown when the model call failed.
pub fn spirits_unavailable(cause: &str) -> String {
    format!("Sorry, the spirits cannot answer right now. Error: {}", cause)
}

/// Horizontal rule plus the disclaimer.
pub fn footer() -> String {
    format!("{}\n{}", RULE, DISCLAIMER)
}
