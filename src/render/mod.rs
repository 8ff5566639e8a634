//! Post renderer - turns fetched content API bytes into view-models
//!
//! Both operations are single-pass and hold no state between calls, so one
//! renderer is shared by every request.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{ContentLoader, MarkdownRenderer, PostCollection, PostSummary};
use crate::error::{DecodeError, Result};
use crate::helpers::{canonical_url, human_date};

/// View-model for the post listing page
#[derive(Debug, Clone, Serialize)]
pub struct PostsPage {
    /// Posts in upstream order
    pub posts: Vec<PostSummary>,
    /// The decoded collection re-encoded as JSON-LD
    pub schema: String,
}

/// View-model for a single post page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPost {
    /// Article body as an HTML fragment
    pub article: String,
    pub date_human_readable: String,
    /// `dateCreated` exactly as received
    pub date: String,
    pub headline: String,
    pub canonical_url: String,
    pub word_count: i64,
    /// Upstream response body, unmodified
    pub schema: String,
}

/// Decodes and renders content API responses
pub struct PostRenderer {
    loader: ContentLoader,
    markdown: MarkdownRenderer,
    canonical_base: String,
}

impl PostRenderer {
    /// Create a renderer from the site configuration
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            loader: ContentLoader::new(config.api.envelope),
            markdown: MarkdownRenderer::with_options(&config.highlight),
            canonical_base: config.canonical_base.clone(),
        }
    }

    /// Decode a post listing response
    pub fn decode_collection(
        &self,
        bytes: &[u8],
    ) -> std::result::Result<PostCollection, DecodeError> {
        self.loader.load_collection(bytes)
    }

    /// Decode a post listing response into its page view-model
    pub fn render_collection(&self, bytes: &[u8]) -> Result<PostsPage> {
        let collection = self.decode_collection(bytes)?;
        let schema = serde_json::to_string(&collection).map_err(DecodeError::from)?;

        Ok(PostsPage {
            posts: collection.blog_posts,
            schema,
        })
    }

    /// Decode a single post response and render it for the page at
    /// `/{date}/{link}`.
    ///
    /// The canonical URL comes from `date` and `link`, never from the
    /// post's own `url`. An unparseable `dateCreated` leaves
    /// `date_human_readable` empty; any other failure is returned.
    pub fn render_detail(&self, bytes: &[u8], date: &str, link: &str) -> Result<RenderedPost> {
        let post = self.loader.load_detail(bytes)?;
        let article = self.markdown.render(&post.article_body)?;
        let summary = post.summary;

        Ok(RenderedPost {
            article,
            date_human_readable: human_date(&summary.date_created),
            date: summary.date_created,
            headline: summary.headline,
            canonical_url: canonical_url(&self.canonical_base, date, link),
            word_count: summary.word_count,
            schema: String::from_utf8_lossy(bytes).into_owned(),
        })
    }
}
