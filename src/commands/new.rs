//! Create a new post pair

use anyhow::Result;
use std::fs;

use crate::resolver::CONTENT_EXT;
use crate::Site;

/// Create the page template and content file for a new post
pub fn create_post(site: &Site, title: &str) -> Result<()> {
    let now = chrono::Local::now();
    let slug = slug::slugify(title);

    let posts_dir = site.source_dir.join("posts");
    fs::create_dir_all(&posts_dir)?;

    let template_path = posts_dir.join(format!("{}.html.{}", slug, site.config.template_ext));
    let content_path = posts_dir.join(format!("{}.html.{}", slug, CONTENT_EXT));

    if template_path.exists() || content_path.exists() {
        anyhow::bail!("post already exists: {:?}", template_path);
    }

    fs::write(&template_path, "{% include \"post.html\" %}\n")?;

    let front_matter = format!(
        "---\ntitle: {}\ndate: {}\nauthor: {}\n---\n\n",
        title,
        now.format("%Y-%m-%d"),
        site.config.author
    );
    fs::write(&content_path, front_matter)?;

    println!("Created: {:?}", template_path);
    println!("Created: {:?}", content_path);

    Ok(())
}
