//! Page renderer - two-phase composition of layout, wrapper and body
//!
//! The resolve phase computes every value a template can read into an
//! immutable [`PageContext`]; the layout phase only reads from that
//! context. The base layout's title slot is therefore always populated
//! before it is evaluated, and no value is ever computed twice.

use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::content::MarkdownRenderer;
use crate::helpers::{title_case, url_for, widen_separators};
use crate::resolver::{PageResolver, Resolution};
use crate::templates::{PageContext, TemplateRenderer};

/// Renders page template/content pairs into complete HTML documents
pub struct PageRenderer<'a> {
    config: &'a SiteConfig,
    resolver: PageResolver<'a>,
    markdown: MarkdownRenderer,
    templates: TemplateRenderer,
}

impl<'a> PageRenderer<'a> {
    /// Create a new page renderer
    pub fn new(config: &'a SiteConfig) -> Result<Self> {
        Ok(Self {
            config,
            resolver: PageResolver::new(config),
            markdown: MarkdownRenderer::new(),
            templates: TemplateRenderer::new()?,
        })
    }

    /// Render a page template to a complete HTML document.
    ///
    /// Renders are independent and idempotent: the same pair of files
    /// yields byte-identical output on every call.
    pub fn render(&mut self, template_path: &Path) -> Result<String> {
        // Resolve phase
        let resolution = self.resolver.resolve(template_path)?;
        let context = self.build_context(&resolution)?;

        // Layout phase
        let page_src = fs::read_to_string(template_path)
            .with_context(|| format!("failed to read template {:?}", template_path))?;

        let article = self.templates.render_page(&page_src, &context)?;
        self.templates.render_layout(&context, &article)
    }

    /// Build the immutable context every template of this page reads from
    fn build_context(&self, resolution: &Resolution) -> Result<PageContext> {
        // Explicit titles pass through untouched; derived ones get their
        // separators widened and each word capitalized for display
        let title = match resolution.metadata.title {
            Some(ref explicit) => explicit.clone(),
            None => title_case(&widen_separators(&resolution.title)),
        };

        let date = resolution
            .metadata
            .parse_date()
            .map(|d| d.format(&self.config.date_format).to_string())
            .unwrap_or_else(|| resolution.date.clone());

        let image = if resolution.image.is_empty() {
            String::new()
        } else {
            url_for(self.config, &resolution.image)
        };

        Ok(PageContext {
            title,
            date,
            author: resolution.metadata.author.clone().unwrap_or_default(),
            image,
            body: self.markdown.render(&resolution.body)?,
            site_title: self.config.title.clone(),
            css_url: url_for(self.config, &self.config.stylesheet),
        })
    }
}
