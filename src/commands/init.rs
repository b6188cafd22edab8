//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"title: My Blog
author: John Doe
url: http://example.com
root: /
source_dir: source
public_dir: public
template_ext: tera
stylesheet: /static/css/main.css
date_format: "%Y-%m-%d"
strict_metadata: false
"#;

const SAMPLE_TEMPLATE: &str = "{% include \"post.html\" %}\n";

const DEFAULT_STYLESHEET: &str = r#"body {
  max-width: 44rem;
  margin: 0 auto;
  padding: 1rem;
  font-family: sans-serif;
  line-height: 1.6;
}

.post-image {
  max-width: 100%;
}

.meta {
  color: #666;
}
"#;

/// Scaffold a new site: config file, a sample post pair and a stylesheet
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("site already initialized: {:?}", config_path);
    }

    let posts_dir = target_dir.join("source/posts");
    let css_dir = target_dir.join("source/static/css");
    fs::create_dir_all(&posts_dir)?;
    fs::create_dir_all(&css_dir)?;
    fs::create_dir_all(target_dir.join("source/static/img"))?;

    fs::write(&config_path, DEFAULT_CONFIG)?;
    fs::write(css_dir.join("main.css"), DEFAULT_STYLESHEET)?;

    let now = chrono::Local::now();
    let sample_content = format!(
        "---\ndate: {}\nauthor: John Doe\n---\n\nWelcome to your new blog.\n",
        now.format("%Y-%m-%d")
    );
    fs::write(posts_dir.join("hello_world.html.tera"), SAMPLE_TEMPLATE)?;
    fs::write(posts_dir.join("hello_world.html.md"), sample_content)?;

    tracing::info!("Scaffolded site in {:?}", target_dir);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Site;
    use tempfile::TempDir;

    #[test]
    fn test_init_scaffolds_buildable_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        assert!(dir.path().join("_config.yml").is_file());
        assert!(dir
            .path()
            .join("source/posts/hello_world.html.tera")
            .is_file());

        let site = Site::new(dir.path()).unwrap();
        site.build().unwrap();

        let html =
            fs::read_to_string(site.public_dir.join("posts/hello_world.html")).unwrap();
        assert!(html.contains("<title>Hello World</title>"));
    }

    #[test]
    fn test_init_refuses_existing_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
