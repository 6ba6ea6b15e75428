//! ANSI terminal emitter
//!
//! Writes a `RenderedBlock` to a terminal using crossterm styling.
//! Lines are padded to a common display width so the block background
//! forms a rectangle.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{
        Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
};
use unicode_width::UnicodeWidthStr;

use crate::render::RenderedBlock;
use crate::style::Color;

/// Write a block to a terminal-capable writer
pub fn write_block<W: Write>(out: &mut W, block: &RenderedBlock) -> io::Result<()> {
    let gutter_width = block
        .lines
        .iter()
        .filter_map(|line| line.number)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(0);

    let content_width = block
        .lines
        .iter()
        .map(|line| line.text().as_str().width())
        .max()
        .unwrap_or(0);

    for line in &block.lines {
        queue!(
            out,
            SetBackgroundColor(term_color(block.background)),
            SetForegroundColor(term_color(block.foreground)),
        )?;

        if gutter_width > 0 {
            let label = match line.number {
                Some(n) => format!("{:>width$} ", n, width = gutter_width),
                None => " ".repeat(gutter_width + 1),
            };
            queue!(
                out,
                SetAttribute(Attribute::Dim),
                Print(label),
                SetAttribute(Attribute::NormalIntensity),
            )?;
        }

        for token in &line.tokens {
            queue!(out, SetForegroundColor(term_color(token.style.fg)))?;
            if let Some(bg) = token.style.bg {
                queue!(out, SetBackgroundColor(term_color(bg)))?;
            }
            if token.style.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if token.style.italic {
                queue!(out, SetAttribute(Attribute::Italic))?;
            }
            if token.style.underline {
                queue!(out, SetAttribute(Attribute::Underlined))?;
            }

            queue!(out, Print(token.text.as_str()))?;

            if token.style.bold {
                queue!(out, SetAttribute(Attribute::NormalIntensity))?;
            }
            if token.style.italic {
                queue!(out, SetAttribute(Attribute::NoItalic))?;
            }
            if token.style.underline {
                queue!(out, SetAttribute(Attribute::NoUnderline))?;
            }
            if token.style.bg.is_some() {
                queue!(out, SetBackgroundColor(term_color(block.background)))?;
            }
        }

        let pad = content_width.saturating_sub(line.text().as_str().width());
        if pad > 0 {
            queue!(out, Print(" ".repeat(pad)))?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }

    out.flush()
}

/// Convert an sRGB color to the crossterm color type
fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Highlighter, RenderOptions};

    fn render_to_string(source: &str, options: RenderOptions) -> String {
        let highlighter = Highlighter::new();
        let block = highlighter
            .render_with(source, "bash", "github-dark", options)
            .unwrap();
        let mut out = Vec::new();
        write_block(&mut out, &block).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_token_text_appears_in_order() {
        let output = render_to_string("brew install migraine", RenderOptions::default());
        let brew = output.find("brew").unwrap();
        let install = output.find("install").unwrap();
        let migraine = output.find("migraine").unwrap();
        assert!(brew < install && install < migraine);
    }

    #[test]
    fn test_one_newline_per_line() {
        let output = render_to_string("a\nb\nc", RenderOptions::default());
        assert_eq!(output.matches('\n').count(), 3);
    }

    #[test]
    fn test_line_numbers_in_gutter() {
        let options = RenderOptions {
            line_numbers: true,
            start_line: 9,
        };
        let output = render_to_string("a\nb", options);
        assert!(output.contains(" 9 "));
        assert!(output.contains("10 "));
    }

    #[test]
    fn test_lines_padded_to_rectangle() {
        let output = render_to_string("short\na much longer line", RenderOptions::default());
        let first_line = output.lines().next().unwrap();
        // "short" (5 columns) padded to the longest line's 18 columns
        let expected = format!("short{}", " ".repeat(13));
        assert!(first_line.contains(&expected));
    }
}
