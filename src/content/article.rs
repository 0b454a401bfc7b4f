//! Article models

use serde::{Deserialize, Serialize};

/// A single article as it appears in listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// Article id (filename without the .md extension)
    pub id: String,

    /// Article title
    pub title: String,

    /// Publication date, as written in the front-matter
    pub date: String,

    /// Category the article belongs to
    pub category: String,
}

/// A fully rendered article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedArticle {
    /// Article id (filename without the .md extension)
    pub id: String,

    /// Rendered HTML content
    pub content_html: String,

    /// Heading shown on the article page; carries the category name
    pub title: String,

    /// Publication date in display form, e.g. "Jan 05 2024"
    pub date: String,
}
