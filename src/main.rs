//! CLI entry point for articles-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "articles-rs")]
#[command(version = "0.1.0")]
#[command(about = "Markdown article loader for static and server-rendered sites", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List articles sorted by date
    #[command(alias = "ls")]
    List {
        /// Type of content to list (article, category)
        #[arg(default_value = "article")]
        r#type: String,
    },

    /// List articles grouped by category
    Categories,

    /// Render a single article to HTML
    Show {
        /// Article id (filename without the .md extension)
        id: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "articles_rs=debug,info"
    } else {
        "articles_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::List { r#type } => {
            let site = articles_rs::Site::new(&base_dir)?;
            articles_rs::commands::list::run(&site, &r#type)?;
        }

        Commands::Categories => {
            let site = articles_rs::Site::new(&base_dir)?;
            articles_rs::commands::list::run(&site, "category")?;
        }

        Commands::Show { id } => {
            let site = articles_rs::Site::new(&base_dir)?;
            tracing::info!("Rendering article: {}", id);
            articles_rs::commands::show::run(&site, &id)?;
        }

        Commands::Version => {
            println!("articles-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
