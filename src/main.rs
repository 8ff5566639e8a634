//! CLI entry point for schema-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "schema-blog")]
#[command(version)]
#[command(about = "Server-side renderer for a schema.org-backed blog", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "_config.yml")]
    config: PathBuf,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (overrides the config file)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// List posts from the content API
    Posts,

    /// Render a single post's article HTML
    Post {
        /// Date segment, e.g. 2023-04-01
        date: String,

        /// Link segment, e.g. my-post
        link: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "schema_blog=debug,tower_http=debug,info"
    } else {
        "schema_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { port, ip } => {
            let blog = schema_blog::Blog::load(&cli.config)?;
            let ip = ip.unwrap_or_else(|| blog.config.server.ip.clone());
            let port = port.unwrap_or(blog.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            schema_blog::server::start(blog, &ip, port).await?;
        }

        Commands::Posts => {
            let blog = schema_blog::Blog::load(&cli.config)?;
            schema_blog::commands::posts::run(&blog).await?;
        }

        Commands::Post { date, link } => {
            let blog = schema_blog::Blog::load(&cli.config)?;
            schema_blog::commands::post::run(&blog, &date, &link).await?;
        }

        Commands::Version => {
            println!("schema-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
