//! List posts from the content API

use anyhow::Result;

use crate::helpers::{human_date, url_path};
use crate::Blog;

/// Print the post listing in upstream order
pub async fn run(blog: &Blog) -> Result<()> {
    let page = blog.posts().await?;

    println!("Posts ({}):", page.posts.len());
    for post in &page.posts {
        println!(
            "  {} - {} [{}]",
            human_date(&post.date_created),
            post.headline,
            url_path(&post.url)
        );
    }

    Ok(())
}
