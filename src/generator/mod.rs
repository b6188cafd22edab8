//! Generator module - renders every page pair and copies static assets

use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::renderer::PageRenderer;
use crate::resolver::CONTENT_EXT;
use crate::Site;

/// Walks the source tree and produces the public directory
pub struct Generator<'a> {
    site: &'a Site,
    renderer: PageRenderer<'a>,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(site: &'a Site) -> Result<Self> {
        Ok(Self {
            site,
            renderer: PageRenderer::new(&site.config)?,
        })
    }

    /// Render all page templates and copy every other file verbatim.
    ///
    /// A failing page aborts the whole build; there is no partial output
    /// for it.
    pub fn build(&mut self) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)?;

        let mut rendered = 0usize;
        let mut copied = 0usize;

        for entry in WalkDir::new(&self.site.source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(&self.site.source_dir).unwrap_or(path);

            if self.is_page_template(path) {
                self.render_page(path, relative)?;
                rendered += 1;
            } else if self.is_content_file(path) {
                // Consumed by its page template, never copied
            } else {
                self.copy_asset(path, relative)?;
                copied += 1;
            }
        }

        tracing::info!("Rendered {} pages, copied {} assets", rendered, copied);
        Ok(())
    }

    fn render_page(&mut self, path: &Path, relative: &Path) -> Result<()> {
        let html = self
            .renderer
            .render(path)
            .with_context(|| format!("failed to render {:?}", path))?;

        let output = self.output_path(relative);
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output, html)?;
        tracing::debug!("Rendered {:?}", output);
        Ok(())
    }

    fn copy_asset(&self, path: &Path, relative: &Path) -> Result<()> {
        let output = self.site.public_dir.join(relative);
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &output)
            .with_context(|| format!("failed to copy asset {:?}", path))?;
        tracing::debug!("Copied {:?}", output);
        Ok(())
    }

    /// Output path for a page: the template suffix is dropped, leaving
    /// `<name>.html` under the public directory
    fn output_path(&self, relative: &Path) -> PathBuf {
        let name = relative.to_string_lossy();
        let suffix = format!(".{}", self.site.config.template_ext);
        let trimmed = name
            .strip_suffix(suffix.as_str())
            .map(|t| t.to_string())
            .unwrap_or_else(|| name.to_string());
        self.site.public_dir.join(trimmed)
    }

    fn is_page_template(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(&format!(".html.{}", self.site.config.template_ext)))
            .unwrap_or(false)
    }

    fn is_content_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(&format!(".html.{}", CONTENT_EXT)))
            .unwrap_or(false)
    }
}
