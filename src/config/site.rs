//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub description: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    // Pages
    /// Extension of page template files (`<name>.html.<template_ext>`)
    pub template_ext: String,
    /// Stylesheet path injected into the base layout
    pub stylesheet: String,

    // Date format (chrono strftime syntax)
    pub date_format: String,

    /// When true, a missing `date`, `author` or `image` metadata field
    /// aborts the render instead of rendering as an empty string
    pub strict_metadata: bool,

    /// Store any additional fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Inkpress".to_string(),
            author: String::new(),
            description: String::new(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),

            template_ext: "tera".to_string(),
            stylesheet: "/static/css/main.css".to_string(),

            date_format: "%Y-%m-%d".to_string(),

            strict_metadata: false,

            extra: IndexMap::new(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Inkpress");
        assert_eq!(config.template_ext, "tera");
        assert_eq!(config.source_dir, "source");
        assert!(!config.strict_metadata);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
author: Test User
template_ext: tera
strict_metadata: true
analytics_id: UA-12345
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.author, "Test User");
        assert!(config.strict_metadata);
        assert_eq!(
            config.extra.get("analytics_id").and_then(|v| v.as_str()),
            Some("UA-12345")
        );
    }
}
