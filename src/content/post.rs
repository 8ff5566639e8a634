//! Blog content model as served by the content API
//!
//! Field names follow schema.org. Every key is listed explicitly with
//! `rename`, so this file doubles as the JSON key table. Optional keys that
//! are absent or `null` decode to empty values; `url` and `dateCreated` are
//! required.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` the same way as a missing key
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An illustrative image reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(rename = "@type", default, deserialize_with = "null_default")]
    pub kind: String,

    #[serde(rename = "url", default, deserialize_with = "null_default")]
    pub url: String,
}

/// An author or copyright holder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "@type", default, deserialize_with = "null_default")]
    pub kind: String,

    #[serde(rename = "name", default, deserialize_with = "null_default")]
    pub name: String,

    #[serde(rename = "alternateName", default, deserialize_with = "null_default")]
    pub alternate_name: String,

    #[serde(rename = "givenName", default, deserialize_with = "null_default")]
    pub given_name: String,

    #[serde(rename = "additionalName", default, deserialize_with = "null_default")]
    pub additional_name: String,

    #[serde(rename = "familyName", default, deserialize_with = "null_default")]
    pub family_name: String,

    /// Profile URL
    #[serde(rename = "url", default, deserialize_with = "null_default")]
    pub url: String,
}

/// Publisher identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organisation {
    #[serde(rename = "@type", default, deserialize_with = "null_default")]
    pub kind: String,

    #[serde(rename = "name", default, deserialize_with = "null_default")]
    pub name: String,

    #[serde(rename = "logo", default, deserialize_with = "null_default")]
    pub logo: Image,
}

/// A post as it appears in the listing, without its body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    #[serde(rename = "@context", default, deserialize_with = "null_default")]
    pub context: String,

    #[serde(rename = "@type", default, deserialize_with = "null_default")]
    pub kind: String,

    #[serde(rename = "name", default, deserialize_with = "null_default")]
    pub name: String,

    /// Creation timestamp, e.g. `2023-04-01T10:00:00+00:00`
    #[serde(rename = "dateCreated")]
    pub date_created: String,

    #[serde(rename = "datePublished", default, deserialize_with = "null_default")]
    pub date_published: String,

    #[serde(rename = "dateModified", default, deserialize_with = "null_default")]
    pub date_modified: String,

    #[serde(rename = "wordCount", default, deserialize_with = "null_default")]
    pub word_count: i64,

    #[serde(rename = "author", default, deserialize_with = "null_default")]
    pub author: Person,

    /// Upstream permalink
    #[serde(rename = "url")]
    pub url: String,

    #[serde(rename = "mainEntityOfPage", default, deserialize_with = "null_default")]
    pub main_entity_of_page: String,

    #[serde(rename = "inLanguage", default, deserialize_with = "null_default")]
    pub in_language: String,

    #[serde(rename = "copyrightHolder", default, deserialize_with = "null_default")]
    pub copyright_holder: Person,

    #[serde(rename = "publisher", default, deserialize_with = "null_default")]
    pub publisher: Organisation,

    #[serde(rename = "headline", default, deserialize_with = "null_default")]
    pub headline: String,

    #[serde(rename = "license", default, deserialize_with = "null_default")]
    pub license: String,

    #[serde(rename = "image", default, deserialize_with = "null_default")]
    pub image: Image,

    #[serde(rename = "sameAs", default, deserialize_with = "null_default")]
    pub same_as: String,
}

/// A single post including its markdown body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub summary: PostSummary,

    /// Raw markdown source
    #[serde(rename = "articleBody", default, deserialize_with = "null_default")]
    pub article_body: String,
}

/// All posts returned by one list request, in upstream order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCollection {
    #[serde(rename = "@context", default, deserialize_with = "null_default")]
    pub context: String,

    #[serde(rename = "@type", default, deserialize_with = "null_default")]
    pub kind: String,

    #[serde(rename = "blogPosts")]
    pub blog_posts: Vec<PostSummary>,
}

impl PostCollection {
    pub fn len(&self) -> usize {
        self.blog_posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blog_posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_variants() {
        let json = r#"{
            "@type": "Person",
            "name": "Elliot J. Reed",
            "givenName": "Elliot",
            "additionalName": "John",
            "familyName": "Reed",
            "url": "https://www.elliotjreed.com"
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.kind, "Person");
        assert_eq!(person.given_name, "Elliot");
        assert_eq!(person.additional_name, "John");
        assert_eq!(person.family_name, "Reed");
        assert_eq!(person.alternate_name, "");
    }

    #[test]
    fn test_detail_flattens_summary() {
        let json = r##"{
            "headline": "Hello",
            "url": "https://www.elliotjreed.com/blog/2023-04-01/hello",
            "dateCreated": "2023-04-01T10:00:00+00:00",
            "wordCount": 42,
            "publisher": {"@type": "Organization", "name": "EJR", "logo": {"@type": "ImageObject", "url": "https://example.com/logo.png"}},
            "articleBody": "# Hello"
        }"##;
        let post: PostDetail = serde_json::from_str(json).unwrap();
        assert_eq!(post.summary.headline, "Hello");
        assert_eq!(post.summary.word_count, 42);
        assert_eq!(post.summary.publisher.logo.url, "https://example.com/logo.png");
        assert_eq!(post.article_body, "# Hello");
    }

    #[test]
    fn test_null_optional_fields_are_empty() {
        let json = r#"{
            "url": "https://example.com/a",
            "dateCreated": "2023-04-01T10:00:00+00:00",
            "wordCount": null,
            "author": {"@type": "Person", "name": "Elliot", "alternateName": null},
            "sameAs": null,
            "image": null,
            "publisher": {"name": "EJR", "logo": null},
            "articleBody": null
        }"#;
        let post: PostDetail = serde_json::from_str(json).unwrap();
        assert_eq!(post.summary.word_count, 0);
        assert_eq!(post.summary.author.name, "Elliot");
        assert_eq!(post.summary.author.alternate_name, "");
        assert_eq!(post.summary.same_as, "");
        assert_eq!(post.summary.image, Image::default());
        assert_eq!(post.summary.publisher.logo, Image::default());
        assert_eq!(post.article_body, "");
    }

    #[test]
    fn test_null_required_field_is_rejected() {
        let json = r#"{"url": null, "dateCreated": "2023-04-01T10:00:00+00:00"}"#;
        assert!(serde_json::from_str::<PostSummary>(json).is_err());
    }

    #[test]
    fn test_serialize_uses_schema_keys() {
        let json = r#"{"url": "https://example.com/a", "dateCreated": "2023-04-01T10:00:00+00:00", "sameAs": "x"}"#;
        let post: PostSummary = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["dateCreated"], "2023-04-01T10:00:00+00:00");
        assert_eq!(value["sameAs"], "x");
        assert!(value.get("date_created").is_none());
    }
}
