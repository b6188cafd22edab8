//! Built-in layout templates using the Tera template engine
//!
//! The base layout and the standard post wrapper are embedded directly in
//! the binary. Per-page templates come from the site's source tree and are
//! registered at render time; they can `{% include "post.html" %}` to get
//! the standard article markup. The layout never calls back into a page:
//! it only reads values the resolve phase has already placed in the
//! [`PageContext`].

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Immutable values a single page render exposes to its templates.
/// Built once per render in the resolve phase; the layout phase only
/// reads from it.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    /// Display title, filling both the layout title slot and the heading
    pub title: String,
    /// Formatted publication date
    pub date: String,
    pub author: String,
    /// Main image URL (empty when the post has none)
    pub image: String,
    /// Rendered markdown body
    pub body: String,
    pub site_title: String,
    pub css_url: String,
}

/// Template renderer with the embedded base layout
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with the built-in templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Autoescaping is off: template values are URLs and pre-rendered
        // HTML, not untrusted input
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("builtin/layout.html")),
            ("post.html", include_str!("builtin/post.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a page's own template with the resolved context,
    /// producing the article body
    pub fn render_page(&mut self, source: &str, page: &PageContext) -> Result<String> {
        self.tera.add_raw_template("page.html", source)?;
        let context = Context::from_serialize(page)?;
        Ok(self.tera.render("page.html", &context)?)
    }

    /// Wrap an already-rendered article in the base layout
    pub fn render_layout(&self, page: &PageContext, article: &str) -> Result<String> {
        let mut context = Context::from_serialize(page)?;
        context.insert("content", article);
        Ok(self.tera.render("layout.html", &context)?)
    }
}
