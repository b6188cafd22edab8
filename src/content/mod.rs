//! Content module - front matter and markdown rendering

mod frontmatter;
mod markdown;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
