//! Content module - the blog content model, its decoding and markdown rendering

pub mod loader;
mod markdown;
mod post;

pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
pub use post::{Image, Organisation, Person, PostCollection, PostDetail, PostSummary};
