//! Render a single post to stdout

use anyhow::Result;

use crate::Blog;

/// Print the rendered article HTML for the post at `/{date}/{link}`
pub async fn run(blog: &Blog, date: &str, link: &str) -> Result<()> {
    let post = blog.post(date, link).await?;
    tracing::info!(
        "Rendered \"{}\" ({} words) for {}",
        post.headline,
        post.word_count,
        post.canonical_url
    );

    println!("{}", post.article);
    Ok(())
}
