//! inkpress: a small static blog generator
//!
//! Every page of the site is a pair of files: a Tera page template
//! (`<name>.html.tera`) and a companion Markdown file (`<name>.html.md`)
//! carrying front-matter metadata. Rendering is a two-phase pipeline: a
//! resolve phase computes all metadata and the page title up front, then a
//! layout phase composes the base layout, the page's own template and the
//! rendered Markdown body into the final document.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod renderer;
pub mod resolver;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main site handle
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source directory (page templates, content files, static assets)
    pub source_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new site handle from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            public_dir,
        })
    }

    /// Build the whole site
    pub fn build(&self) -> Result<()> {
        commands::build::run(self)
    }

    /// Delete the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Scaffold a new post pair
    pub fn new_post(&self, title: &str) -> Result<()> {
        commands::new::create_post(self, title)
    }
}
