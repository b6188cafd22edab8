//! Template resolver - maps a page template to its companion metadata
//!
//! A page template `<name>.html.<template_ext>` is paired with a content
//! file `<name>.html.md` holding front matter and the post body. The pair
//! is located by a fixed suffix transformation on the template path.
//! Resolution re-reads the content file on every call; nothing is cached
//! across renders.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::SiteConfig;
use crate::content::FrontMatter;

/// Extension of companion content files
pub const CONTENT_EXT: &str = "md";

/// Errors a page resolution can fail with. All of them are fatal for the
/// page being rendered; there is no partial-render or recovery path.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The template path does not end with `.html.<template_ext>`
    #[error("template path {path:?} does not end with `.html.{expected}`")]
    PathFormat { path: PathBuf, expected: String },

    /// The companion content file does not exist
    #[error("companion content file not found: {0:?}")]
    MissingContentFile(PathBuf),

    /// A required metadata field is absent (strict mode only)
    #[error("metadata field `{field}` missing in {path:?}")]
    MissingField { field: &'static str, path: PathBuf },

    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid front matter in {path:?}: {message}")]
    Metadata { path: PathBuf, message: String },
}

/// Everything the layout phase needs, computed up front.
/// Read-only once built; the renderer never writes back into it.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Raw `date` field from the front matter
    pub date: String,
    /// Path of the companion content file
    pub content_path: PathBuf,
    /// Parsed front matter
    pub metadata: FrontMatter,
    /// Explicit title, or one derived from the content file name
    pub title: String,
    /// Raw `image` field from the front matter
    pub image: String,
    /// Markdown body of the content file
    pub body: String,
}

/// Resolves page templates to their metadata
pub struct PageResolver<'a> {
    config: &'a SiteConfig,
}

impl<'a> PageResolver<'a> {
    /// Create a new resolver for the given site configuration
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Resolve a page template path to its companion metadata.
    ///
    /// The suffix precondition is checked before any file I/O. When the
    /// front matter carries no `title`, one is derived from the content
    /// file's base name with underscores replaced by spaces.
    pub fn resolve(&self, template_path: &Path) -> Result<Resolution, ResolveError> {
        let path_format_err = || ResolveError::PathFormat {
            path: template_path.to_path_buf(),
            expected: self.config.template_ext.clone(),
        };

        let path_str = template_path.to_str().ok_or_else(path_format_err)?;
        let template_suffix = format!(".{}", self.config.template_ext);
        let base = path_str
            .strip_suffix(&template_suffix)
            .filter(|b| b.ends_with(".html"))
            .ok_or_else(path_format_err)?;

        let content_path = PathBuf::from(format!("{}.{}", base, CONTENT_EXT));
        if !content_path.is_file() {
            return Err(ResolveError::MissingContentFile(content_path));
        }

        let raw = fs::read_to_string(&content_path).map_err(|source| ResolveError::Io {
            path: content_path.clone(),
            source,
        })?;

        let (metadata, body) =
            FrontMatter::parse(&raw).map_err(|e| ResolveError::Metadata {
                path: content_path.clone(),
                message: e.to_string(),
            })?;

        if self.config.strict_metadata {
            for (field, value) in [
                ("date", &metadata.date),
                ("author", &metadata.author),
                ("image", &metadata.image),
            ] {
                if value.is_none() {
                    return Err(ResolveError::MissingField {
                        field,
                        path: content_path.clone(),
                    });
                }
            }
        }

        let title = match metadata.title {
            Some(ref explicit) => explicit.clone(),
            None => derive_title(&content_path),
        };

        Ok(Resolution {
            date: metadata.date.clone().unwrap_or_default(),
            image: metadata.image.clone().unwrap_or_default(),
            title,
            body: body.to_string(),
            metadata,
            content_path,
        })
    }
}

/// Derive a display title from a content file name:
/// strip directory and suffix, replace underscores with spaces
fn derive_title(content_path: &Path) -> String {
    let name = content_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("untitled");
    let base = name
        .strip_suffix(&format!(".html.{}", CONTENT_EXT))
        .unwrap_or(name);
    base.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_content(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_bad_suffix_is_path_format_error() {
        let config = SiteConfig::default();
        let resolver = PageResolver::new(&config);

        for bad in ["posts/foo.html", "posts/foo.md", "posts/foo.tera"] {
            let err = resolver.resolve(Path::new(bad)).unwrap_err();
            assert!(matches!(err, ResolveError::PathFormat { .. }), "{}", bad);
        }
    }

    #[test]
    fn test_missing_content_file() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let resolver = PageResolver::new(&config);

        let template = dir.path().join("ghost.html.tera");
        let err = resolver.resolve(&template).unwrap_err();
        assert!(matches!(err, ResolveError::MissingContentFile(_)));
    }

    #[test]
    fn test_title_derived_from_filename() {
        let dir = TempDir::new().unwrap();
        write_content(&dir, "my_post.html.md", "---\ndate: 2024-01-15\n---\nBody.\n");

        let config = SiteConfig::default();
        let resolver = PageResolver::new(&config);

        let resolution = resolver
            .resolve(&dir.path().join("my_post.html.tera"))
            .unwrap();
        assert_eq!(resolution.title, "my post");
        assert_eq!(resolution.date, "2024-01-15");
    }

    #[test]
    fn test_explicit_title_wins() {
        let dir = TempDir::new().unwrap();
        write_content(
            &dir,
            "my_post.html.md",
            "---\ntitle: A Chosen Title\ndate: 2024-01-15\n---\nBody.\n",
        );

        let config = SiteConfig::default();
        let resolver = PageResolver::new(&config);

        let resolution = resolver
            .resolve(&dir.path().join("my_post.html.tera"))
            .unwrap();
        assert_eq!(resolution.title, "A Chosen Title");
    }

    #[test]
    fn test_strict_mode_missing_field() {
        let dir = TempDir::new().unwrap();
        write_content(
            &dir,
            "my_post.html.md",
            "---\ndate: 2024-01-15\nauthor: Jane\n---\nBody.\n",
        );

        let config = SiteConfig {
            strict_metadata: true,
            ..Default::default()
        };
        let resolver = PageResolver::new(&config);

        let err = resolver
            .resolve(&dir.path().join("my_post.html.tera"))
            .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::MissingField { field: "image", .. }
        ));
    }

    #[test]
    fn test_metadata_reread_every_call() {
        let dir = TempDir::new().unwrap();
        let content_path =
            write_content(&dir, "my_post.html.md", "---\ntitle: First\n---\nBody.\n");
        let template = dir.path().join("my_post.html.tera");

        let config = SiteConfig::default();
        let resolver = PageResolver::new(&config);

        assert_eq!(resolver.resolve(&template).unwrap().title, "First");

        fs::write(&content_path, "---\ntitle: Second\n---\nBody.\n").unwrap();
        assert_eq!(resolver.resolve(&template).unwrap().title, "Second");
    }
}
