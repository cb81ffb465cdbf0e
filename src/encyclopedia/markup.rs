//! Markup rendering.
//!
//! Entries are stored as Markdown and rendered to HTML in a single pass. The
//! [`Renderer`] trait is the seam: handlers only ever call `render`, so a
//! different dialect or an escaping-only renderer can be swapped in.

use pulldown_cmark::{html, Options, Parser};

/// Turns stored markup into display text. Must be pure and total.
pub trait Renderer {
    fn render(&self, markup: &str) -> String;
}

/// CommonMark renderer with tables and strikethrough.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, markup: &str) -> String {
        let parser = Parser::new_ext(markup, Self::options());
        let mut output = String::with_capacity(markup.len() * 3 / 2);
        html::push_html(&mut output, parser);
        // pulldown-cmark ends every block with a newline
        output.truncate(output.trim_end().len());
        output
    }
}
