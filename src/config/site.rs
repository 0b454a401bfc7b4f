//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding the article sources, relative to the base directory
    pub articles_dir: String,

    /// Category assigned to articles whose front-matter has none
    pub default_category: String,

    /// Front-matter date format (date-fns tokens)
    pub date_format: String,

    /// Date format used when rendering an article for display
    pub display_date_format: String,

    /// Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            articles_dir: "articles".to_string(),
            default_category: "uncategorized".to_string(),
            date_format: "dd-MM-yyyy".to_string(),
            display_date_format: "MMM dd yyyy".to_string(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
