//! Markdown rendering

use anyhow::Result;
use pulldown_cmark::{html, Options, Parser};

/// Renders markdown bodies to HTML
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // Plain CommonMark; front-matter is stripped before rendering,
        // so no metadata-block option here
        Self {
            options: Options::empty(),
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String> {
        let parser = Parser::new_ext(markdown, self.options);

        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(html_output)
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
