//! Content loader - decodes content API responses into the content model

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{PostCollection, PostDetail, PostSummary};
use crate::config::Envelope;
use crate::error::DecodeError;

/// `{"data": ...}` wrapper used by some API versions
#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Decodes upstream JSON with a fixed envelope shape
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentLoader {
    envelope: Envelope,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new(envelope: Envelope) -> Self {
        Self { envelope }
    }

    /// Decode a post listing, keeping upstream order
    pub fn load_collection(&self, bytes: &[u8]) -> Result<PostCollection, DecodeError> {
        let collection: PostCollection = self.decode(bytes)?;
        for post in &collection.blog_posts {
            validate(post)?;
        }

        tracing::debug!("Decoded {} posts", collection.len());
        Ok(collection)
    }

    /// Decode a single post with its body
    pub fn load_detail(&self, bytes: &[u8]) -> Result<PostDetail, DecodeError> {
        let post: PostDetail = self.decode(bytes)?;
        validate(&post.summary)?;
        Ok(post)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        let value = match self.envelope {
            Envelope::Bare => serde_json::from_slice(bytes)?,
            Envelope::Data => serde_json::from_slice::<DataEnvelope<T>>(bytes)?.data,
        };
        Ok(value)
    }
}

fn validate(post: &PostSummary) -> Result<(), DecodeError> {
    if post.url.is_empty() {
        return Err(DecodeError::MissingField("url"));
    }
    if post.date_created.is_empty() {
        return Err(DecodeError::MissingField("dateCreated"));
    }
    Ok(())
}
