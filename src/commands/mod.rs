//! CLI subcommands

pub mod post;
pub mod posts;
