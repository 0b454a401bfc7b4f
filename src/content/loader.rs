//! Article loader - lists, groups and renders articles from the articles directory

use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{ArticleSummary, FrontMatter, MarkdownRenderer, RenderedArticle};
use crate::helpers::{format_date, parse_date};
use crate::Site;

/// Loads articles for a site
pub struct ArticleLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ArticleLoader<'a> {
    /// Create a new article loader
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load all article summaries, sorted by date (oldest first)
    pub fn load_summaries(&self) -> Result<Vec<ArticleSummary>> {
        let mut keyed = Vec::new();

        // Filename order keeps enumeration deterministic across platforms
        for entry in WalkDir::new(&self.site.articles_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let summary = self.load_summary(path)?;
            let date = parse_date(&summary.date, &self.site.config.date_format)
                .with_context(|| format!("in {:?}", path))?;
            keyed.push((date, summary));
        }

        // Stable sort: same-date articles keep enumeration order
        keyed.sort_by(|a, b| a.0.cmp(&b.0));

        tracing::debug!("Loaded {} articles", keyed.len());

        Ok(keyed.into_iter().map(|(_, summary)| summary).collect())
    }

    /// Load a single summary from a file
    fn load_summary(&self, path: &Path) -> Result<ArticleSummary> {
        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read {:?}", path))?;
        let (fm, _body) = FrontMatter::parse(&content)
            .with_context(|| format!("in {:?}", path))?;

        let id = article_id(path);

        let date = fm
            .date
            .with_context(|| format!("missing date in {:?}", path))?;

        let title = fm.title.unwrap_or_else(|| id.clone());
        let category = fm
            .category
            .unwrap_or_else(|| self.site.config.default_category.clone());

        Ok(ArticleSummary {
            id,
            title,
            date,
            category,
        })
    }

    /// Group the sorted articles by category
    ///
    /// Categories appear in order of first occurrence among the sorted
    /// articles; within a category, the global chronological order holds.
    pub fn categorise(&self) -> Result<IndexMap<String, Vec<ArticleSummary>>> {
        let sorted = self.load_summaries()?;
        let mut categorised: IndexMap<String, Vec<ArticleSummary>> = IndexMap::new();

        for article in sorted {
            categorised
                .entry(article.category.clone())
                .or_default()
                .push(article);
        }

        Ok(categorised)
    }

    /// Load one article by id and render its body to HTML
    pub fn load_article(&self, id: &str) -> Result<RenderedArticle> {
        let path = self.site.articles_dir.join(format!("{}.md", id));
        let content =
            fs::read_to_string(&path).with_context(|| format!("failed to read {:?}", path))?;
        let (fm, body) = FrontMatter::parse(&content)
            .with_context(|| format!("in {:?}", path))?;

        let content_html = self.renderer.render(body)?;

        let raw_date = fm
            .date
            .with_context(|| format!("missing date in {:?}", path))?;
        let date = parse_date(&raw_date, &self.site.config.date_format)
            .with_context(|| format!("in {:?}", path))?;
        let date = format_date(&date, &self.site.config.display_date_format);

        // The article page heading shows the category name
        let title = fm
            .category
            .unwrap_or_else(|| self.site.config.default_category.clone());

        Ok(RenderedArticle {
            id: id.to_string(),
            content_html,
            title,
            date,
        })
    }
}

/// Derive an article id from its file name (strip a trailing .md)
fn article_id(path: &Path) -> String {
    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
    name.strip_suffix(".md").unwrap_or(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_article(dir: &Path, name: &str, title: &str, date: &str, category: &str) {
        let content = format!(
            "---\ntitle: {}\ndate: {}\ncategory: {}\n---\n\n# {}\n\nBody text.\n",
            title, date, category, title
        );
        fs::write(dir.join(name), content).unwrap();
    }

    fn site_with_articles() -> (TempDir, Site) {
        let tmp = tempfile::tempdir().unwrap();
        let articles = tmp.path().join("articles");
        fs::create_dir(&articles).unwrap();
        write_article(&articles, "first.md", "First", "05-01-2024", "tech");
        write_article(&articles, "second.md", "Second", "20-11-2023", "life");
        write_article(&articles, "third.md", "Third", "01-03-2024", "tech");
        let site = Site::new(tmp.path()).unwrap();
        (tmp, site)
    }

    #[test]
    fn test_summaries_sorted_oldest_first() {
        let (_tmp, site) = site_with_articles();
        let articles = site.sorted_articles().unwrap();

        assert_eq!(articles.len(), 3);
        let ids: Vec<_> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["second", "first", "third"]);
    }

    #[test]
    fn test_ids_match_filenames() {
        let (_tmp, site) = site_with_articles();
        let mut ids: Vec<_> = site
            .sorted_articles()
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        ids.sort();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn test_equal_dates_keep_filename_order() {
        let tmp = tempfile::tempdir().unwrap();
        let articles = tmp.path().join("articles");
        fs::create_dir(&articles).unwrap();
        write_article(&articles, "alpha.md", "Alpha", "10-06-2024", "tech");
        write_article(&articles, "beta.md", "Beta", "10-06-2024", "tech");
        write_article(&articles, "older.md", "Older", "01-01-2020", "tech");

        let site = Site::new(tmp.path()).unwrap();
        let ids: Vec<_> = site
            .sorted_articles()
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, ["older", "alpha", "beta"]);
    }

    #[test]
    fn test_categorise_partitions_sorted_list() {
        let (_tmp, site) = site_with_articles();
        let sorted = site.sorted_articles().unwrap();
        let categorised = site.categorised_articles().unwrap();

        // First occurrence order among the sorted articles
        let keys: Vec<_> = categorised.keys().cloned().collect();
        assert_eq!(keys, ["life", "tech"]);

        // Union of the buckets equals the sorted list, in order
        let mut seen = Vec::new();
        for (category, bucket) in &categorised {
            for article in bucket {
                assert_eq!(&article.category, category);
                seen.push(article.id.clone());
            }
        }
        seen.sort();
        let mut all: Vec<_> = sorted.iter().map(|a| a.id.clone()).collect();
        all.sort();
        assert_eq!(seen, all);

        // Within a category, global chronological order holds
        let tech: Vec<_> = categorised["tech"].iter().map(|a| a.id.as_str()).collect();
        assert_eq!(tech, ["first", "third"]);
    }

    #[test]
    fn test_load_article_renders_html() {
        let tmp = tempfile::tempdir().unwrap();
        let articles = tmp.path().join("articles");
        fs::create_dir(&articles).unwrap();
        fs::write(
            articles.join("hello.md"),
            "---\ntitle: Hello\ndate: 05-01-2024\ncategory: tech\n---\n\n# Hello\n",
        )
        .unwrap();

        let site = Site::new(tmp.path()).unwrap();
        let article = site.article("hello").unwrap();

        assert_eq!(article.id, "hello");
        assert!(article.content_html.contains("<h1>Hello</h1>"));
        assert_eq!(article.title, "tech");
        assert_eq!(article.date, "Jan 05 2024");
    }

    #[test]
    fn test_load_article_missing_file_fails() {
        let (_tmp, site) = site_with_articles();
        assert!(site.article("no-such-article").is_err());
    }

    #[test]
    fn test_bad_date_fails_whole_listing() {
        let (tmp, site) = site_with_articles();
        write_article(
            &tmp.path().join("articles"),
            "broken.md",
            "Broken",
            "not-a-date",
            "tech",
        );
        assert!(site.sorted_articles().is_err());
    }

    #[test]
    fn test_missing_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert!(site.sorted_articles().is_err());
    }

    #[test]
    fn test_missing_title_falls_back_to_id() {
        let tmp = tempfile::tempdir().unwrap();
        let articles = tmp.path().join("articles");
        fs::create_dir(&articles).unwrap();
        fs::write(
            articles.join("untitled.md"),
            "---\ndate: 02-02-2022\n---\n\nbody\n",
        )
        .unwrap();

        let site = Site::new(tmp.path()).unwrap();
        let list = site.sorted_articles().unwrap();
        assert_eq!(list[0].title, "untitled");
        assert_eq!(list[0].category, "uncategorized");
    }
}
