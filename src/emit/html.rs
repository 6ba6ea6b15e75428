//! HTML emitter
//!
//! Converts a `RenderedBlock` into a `<pre>/<code>` fragment with
//! inline styles, suitable for direct embedding in a static page.

use crate::render::RenderedBlock;
use crate::style::Style;

/// Render a block as an HTML fragment
pub fn to_html(block: &RenderedBlock) -> String {
    let mut html = String::new();

    html.push_str("<pre class=\"glint\" data-language=\"");
    html.push_str(&escape(&block.language));
    html.push_str("\" data-theme=\"");
    html.push_str(&escape(&block.theme));
    html.push_str("\" style=\"background-color:");
    html.push_str(&block.background.to_hex());
    html.push_str(";color:");
    html.push_str(&block.foreground.to_hex());
    html.push_str("\"><code>");

    for line in &block.lines {
        html.push_str("<span class=\"line\">");
        if let Some(number) = line.number {
            html.push_str("<span class=\"line-number\">");
            html.push_str(&number.to_string());
            html.push_str("</span>");
        }
        for token in &line.tokens {
            html.push_str("<span class=\"");
            html.push_str(token.class.name());
            html.push_str("\" style=\"");
            html.push_str(&style_attr(&token.style));
            html.push_str("\">");
            html.push_str(&escape(&token.text));
            html.push_str("</span>");
        }
        html.push_str("</span>\n");
    }

    html.push_str("</code></pre>");
    html
}

/// Build the inline style attribute for a token style
fn style_attr(style: &Style) -> String {
    let mut attr = format!("color:{}", style.fg.to_hex());
    if let Some(bg) = style.bg {
        attr.push_str(";background-color:");
        attr.push_str(&bg.to_hex());
    }
    if style.bold {
        attr.push_str(";font-weight:bold");
    }
    if style.italic {
        attr.push_str(";font-style:italic");
    }
    if style.underline {
        attr.push_str(";text-decoration:underline");
    }
    attr
}

/// Escape text for HTML element and attribute content
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
