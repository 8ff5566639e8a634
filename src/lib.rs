//! schema-blog: server-side renderer for a schema.org-backed blog
//!
//! Post listings and single posts are fetched from a JSON content API,
//! article bodies are converted from markdown to HTML, and the result is
//! rendered into pages with the upstream JSON embedded as structured data.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod fetch;
pub mod helpers;
pub mod render;
pub mod server;
pub mod templates;

use std::path::Path;

use crate::error::Result;
use crate::fetch::ContentFetcher;
use crate::render::{PostRenderer, PostsPage, RenderedPost};

/// The main blog application
///
/// Holds only immutable configuration and stateless workers, so one
/// instance serves every request.
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    fetcher: ContentFetcher,
    renderer: PostRenderer,
}

impl Blog {
    /// Create a blog from a configuration file, using defaults if it is missing
    pub fn load<P: AsRef<Path>>(config_path: P) -> anyhow::Result<Self> {
        let config = config::SiteConfig::load_or_default(config_path)?;
        Ok(Self::new(config)?)
    }

    /// Create a blog from an existing configuration
    pub fn new(config: config::SiteConfig) -> Result<Self> {
        let fetcher = ContentFetcher::with_timeout(config.api.timeout())?;
        let renderer = PostRenderer::new(&config);

        Ok(Self {
            config,
            fetcher,
            renderer,
        })
    }

    /// Fetch and decode the post listing
    pub async fn posts(&self) -> Result<PostsPage> {
        let url = helpers::posts_endpoint(&self.config.api.base);
        let bytes = self.fetcher.fetch(&url).await?;
        self.renderer.render_collection(&bytes)
    }

    /// Fetch and render the post at `/{date}/{link}`
    pub async fn post(&self, date: &str, link: &str) -> Result<RenderedPost> {
        let url = helpers::post_endpoint(&self.config.api.base, date, link);
        let bytes = self.fetcher.fetch(&url).await?;
        self.renderer.render_detail(&bytes, date, link)
    }
}
