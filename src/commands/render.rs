//! Render a single page template

use anyhow::Result;
use std::path::Path;

use crate::renderer::PageRenderer;
use crate::Site;

/// Render one page template to an HTML string
pub fn run(site: &Site, template: &Path) -> Result<String> {
    let mut renderer = PageRenderer::new(&site.config)?;
    renderer.render(template)
}
