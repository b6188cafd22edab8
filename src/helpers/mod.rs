//! Helper functions for rendering
//!
//! These are passed to the renderer as explicit capabilities rather than
//! imported ambient utilities inside templates.

mod title;
mod url;

pub use title::*;
pub use url::*;
