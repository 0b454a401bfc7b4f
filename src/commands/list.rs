//! List site content

use anyhow::Result;

use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    match content_type {
        "article" | "articles" => {
            let articles = site.sorted_articles()?;
            println!("Articles ({}):", articles.len());
            for article in articles {
                println!(
                    "  {} - {} [{}]",
                    article.date, article.title, article.category
                );
            }
        }
        "category" | "categories" => {
            let categorised = site.categorised_articles()?;
            println!("Categories ({}):", categorised.len());
            for (category, articles) in categorised {
                println!("  {} ({})", category, articles.len());
                for article in articles {
                    println!("    {} - {}", article.date, article.title);
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: article, category",
                content_type
            );
        }
    }

    Ok(())
}
