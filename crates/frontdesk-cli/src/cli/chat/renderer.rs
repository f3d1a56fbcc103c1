//! Terminal markdown rendering with syntax-highlighted code blocks.
//!
//! `ChatRenderer` combines `termimad` for prose (headings, emphasis,
//! unordered lists, inline code) and `syntect` for fenced code blocks.
//! Assistant replies arrive as complete markdown documents; they are split
//! into prose and code segments and rendered in one pass.

use crossterm::style::Color;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::as_24_bit_terminal_escaped;
use termimad::MadSkin;

/// One piece of an assistant reply.
#[derive(Debug, PartialEq)]
enum Segment {
    /// Markdown prose, rendered through termimad.
    Prose(String),
    /// A fenced code block with its (possibly empty) language tag.
    Code { lang: String, body: String },
}

/// Split a markdown document into prose and fenced code segments.
///
/// An unclosed trailing fence is treated as a code segment.
fn split_segments(markdown: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut prose = String::new();
    let mut code: Option<(String, String)> = None;

    for line in markdown.lines() {
        let fence = line.starts_with("```");
        match code.take() {
            Some((lang, mut body)) => {
                if fence {
                    segments.push(Segment::Code { lang, body });
                } else {
                    body.push_str(line);
                    body.push('\n');
                    code = Some((lang, body));
                }
            }
            None => {
                if fence {
                    if !prose.is_empty() {
                        segments.push(Segment::Prose(std::mem::take(&mut prose)));
                    }
                    let lang = line.trim_start_matches('`').trim().to_string();
                    code = Some((lang, String::new()));
                } else {
                    prose.push_str(line);
                    prose.push('\n');
                }
            }
        }
    }

    if let Some((lang, body)) = code {
        if !body.is_empty() {
            segments.push(Segment::Code { lang, body });
        }
    }
    if !prose.is_empty() {
        segments.push(Segment::Prose(prose));
    }

    segments
}

/// Terminal markdown renderer with syntax highlighting.
pub struct ChatRenderer {
    skin: MadSkin,
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl ChatRenderer {
    /// Create a new renderer with an optional accent color for the assistant.
    pub fn new(accent_color: Option<Color>) -> Self {
        let mut skin = MadSkin::default_dark();

        // Apply accent color to headers and bold text if provided
        if let Some(color) = accent_color {
            let tc = Self::crossterm_to_termimad(color);
            skin.bold.set_fg(tc);
            skin.headers[0].set_fg(tc);
            skin.headers[1].set_fg(tc);
        }

        // Style inline code
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);

        Self {
            skin,
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Render a complete markdown reply for the terminal.
    pub fn render_final(&self, markdown: &str) -> String {
        let mut output = String::new();
        for segment in split_segments(markdown) {
            match segment {
                Segment::Prose(text) => {
                    let rendered = self.skin.term_text(&text);
                    output.push_str(&format!("{rendered}"));
                }
                Segment::Code { lang, body } => {
                    output.push_str(&self.highlight_code(&body, &lang));
                    output.push('\n');
                }
            }
        }
        output
    }

    /// Print the footer after an assistant reply.
    ///
    /// Format: "| {time}s"
    pub fn print_reply_footer(&self, response_ms: u64) {
        let seconds = response_ms as f64 / 1000.0;
        println!(
            "\n  {} {}",
            console::style("|").dim(),
            console::style(format!("{seconds:.1}s")).dim(),
        );
    }

    /// Highlight one code block using syntect.
    fn highlight_code(&self, code: &str, lang: &str) -> String {
        let syntax = if lang.is_empty() {
            self.syntax_set.find_syntax_plain_text()
        } else {
            self.syntax_set
                .find_syntax_by_token(lang)
                .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
        };

        let theme = &self.theme_set.themes["base16-ocean.dark"];
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut output = String::new();
        output.push_str(&format!(
            "  {}\n",
            console::style(format!("--- {lang} ---")).dim()
        ));

        for line in code.lines() {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_default();
            let escaped = as_24_bit_terminal_escaped(&ranges[..], false);
            output.push_str(&format!("  {escaped}\x1b[0m\n"));
        }

        output
    }

    /// Convert a crossterm Color to termimad Color.
    fn crossterm_to_termimad(color: Color) -> termimad::crossterm::style::Color {
        match color {
            Color::Cyan => termimad::crossterm::style::Color::Cyan,
            Color::Green => termimad::crossterm::style::Color::Green,
            Color::Yellow => termimad::crossterm::style::Color::Yellow,
            Color::Magenta => termimad::crossterm::style::Color::Magenta,
            Color::Blue => termimad::crossterm::style::Color::Blue,
            Color::Red => termimad::crossterm::style::Color::Red,
            Color::Rgb { r, g, b } => termimad::crossterm::style::Color::Rgb { r, g, b },
            _ => termimad::crossterm::style::Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_prose_only() {
        let segments = split_segments("### Hours\n\nWe are open **9-5**.\n- Mon\n- Tue\n");
        assert_eq!(segments.len(), 1);
        assert!(matches!(&segments[0], Segment::Prose(p) if p.contains("**9-5**")));
    }

    #[test]
    fn test_split_code_block() {
        let segments = split_segments("Before\n```rust\nfn main() {}\n```\nAfter\n");
        assert_eq!(
            segments,
            vec![
                Segment::Prose("Before\n".to_string()),
                Segment::Code {
                    lang: "rust".to_string(),
                    body: "fn main() {}\n".to_string()
                },
                Segment::Prose("After\n".to_string()),
            ]
        );
    }

    #[test]
    fn test_split_unclosed_fence() {
        let segments = split_segments("text\n```\ncode line\n");
        assert_eq!(segments.len(), 2);
        assert!(matches!(
            &segments[1],
            Segment::Code { lang, body } if lang.is_empty() && body == "code line\n"
        ));
    }

    #[test]
    fn test_render_final_keeps_plain_text() {
        let renderer = ChatRenderer::new(None);
        let out = renderer.render_final("We are open 9-5.");
        assert!(out.contains("We are open 9-5."));
    }
}
