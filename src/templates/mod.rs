//! Page templates using the Tera template engine
//!
//! Templates are embedded in the binary. Rendering is a pure function from a
//! view-model to HTML.

use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::helpers::{escape_html, human_date, script_safe_json, url_path};
use crate::render::{PostsPage, RenderedPost};

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
    site: SiteData,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new(config: &SiteConfig) -> tera::Result<Self> {
        let mut tera = Tera::default();

        // Escape everything by default; the article and schema opt out explicitly
        tera.autoescape_on(vec![".html"]);
        tera.set_escape_fn(escape_html);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("index.html", include_str!("site/index.html")),
            ("posts.html", include_str!("site/posts.html")),
            ("post.html", include_str!("site/post.html")),
            ("error.html", include_str!("site/error.html")),
        ])?;

        tera.register_filter("human_date", human_date_filter);
        tera.register_filter("url_path", url_path_filter);
        tera.register_filter("script_safe", script_safe_filter);

        Ok(Self {
            tera,
            site: SiteData::from(config),
        })
    }

    /// Render the home page
    pub fn render_index(&self) -> tera::Result<String> {
        self.render_context("index.html", Context::new())
    }

    /// Render the post listing page
    pub fn render_posts(&self, page: &PostsPage) -> tera::Result<String> {
        self.render("posts.html", page)
    }

    /// Render a single post page
    pub fn render_post(&self, post: &RenderedPost) -> tera::Result<String> {
        self.render("post.html", post)
    }

    /// Render an error page
    pub fn render_error(&self, status: u16, message: &str) -> tera::Result<String> {
        self.render("error.html", &ErrorData { status, message })
    }

    /// Render a template with the view-model's fields at the top level
    fn render<T: Serialize>(&self, template_name: &str, view: &T) -> tera::Result<String> {
        self.render_context(template_name, Context::from_serialize(view)?)
    }

    fn render_context(&self, template_name: &str, mut context: Context) -> tera::Result<String> {
        context.insert("site", &self.site);
        self.tera.render(template_name, &context)
    }
}

/// Tera filter: long calendar date from an API timestamp
fn human_date_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("human_date", "value", String, value);
    Ok(tera::Value::String(human_date(&s)))
}

/// Tera filter: path component of an absolute URL
fn url_path_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("url_path", "value", String, value);
    Ok(tera::Value::String(url_path(&s)))
}

/// Tera filter: JSON text that can sit inside a `<script>` element
fn script_safe_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("script_safe", "value", String, value);
    Ok(tera::Value::String(script_safe_json(&s)))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
}

impl From<&SiteConfig> for SiteData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: config.language.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct ErrorData<'a> {
    status: u16,
    message: &'a str,
}
