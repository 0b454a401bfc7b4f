//! Render a single article

use anyhow::Result;

use crate::Site;

/// Render one article and print it
pub fn run(site: &Site, id: &str) -> Result<()> {
    let article = site.article(id)?;

    println!("{} - {}", article.title, article.date);
    println!();
    println!("{}", article.content_html);

    Ok(())
}
