//! articles-rs: markdown article loading for static and server-rendered sites
//!
//! This crate reads front-matter annotated markdown files from an articles
//! directory and exposes them as date-sorted summaries, category groupings,
//! and individually rendered HTML articles.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use indexmap::IndexMap;
use std::path::Path;

use content::loader::ArticleLoader;
use content::{ArticleSummary, RenderedArticle};

/// A site rooted at a base directory
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Articles directory
    pub articles_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let articles_dir = base_dir.join(&config.articles_dir);

        Ok(Self {
            config,
            base_dir,
            articles_dir,
        })
    }

    /// List all articles, sorted by date (oldest first)
    pub fn sorted_articles(&self) -> Result<Vec<ArticleSummary>> {
        ArticleLoader::new(self).load_summaries()
    }

    /// Group the sorted articles by category
    pub fn categorised_articles(&self) -> Result<IndexMap<String, Vec<ArticleSummary>>> {
        ArticleLoader::new(self).categorise()
    }

    /// Load a single article by id and render it to HTML
    pub fn article(&self, id: &str) -> Result<RenderedArticle> {
        ArticleLoader::new(self).load_article(id)
    }
}
