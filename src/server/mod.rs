//! HTTP server
//!
//! Each request runs its own fetch-and-render pipeline. A failure is logged
//! and answered with an error page for that request only.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::error::Error;
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Files served from the root of the static directory
const ROOT_FILES: [&str; 5] = [
    "favicon.ico",
    "favicon.png",
    "favicon.svg",
    "robots.txt",
    "humans.txt",
];

/// Server state shared by all handlers
pub struct ServerState {
    blog: Blog,
    templates: TemplateRenderer,
}

impl ServerState {
    pub fn new(blog: Blog) -> Result<Self> {
        let templates = TemplateRenderer::new(&blog.config)?;
        Ok(Self { blog, templates })
    }

    /// Log a pipeline failure and turn it into an error page
    fn error_response(&self, err: Error) -> Response {
        let status = err.status();
        tracing::error!(status = status.as_u16(), "Request failed: {}", err);

        let message = match status {
            StatusCode::GATEWAY_TIMEOUT => "The content service did not respond in time.",
            StatusCode::BAD_GATEWAY => "The content service returned an unusable response.",
            _ => "Something went wrong while rendering this page.",
        };
        self.error_page(status, message)
    }

    fn error_page(&self, status: StatusCode, message: &str) -> Response {
        match self.templates.render_error(status.as_u16(), message) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Error page failed to render: {}", e);
                (status, message.to_string()).into_response()
            }
        }
    }
}

/// Build the application router
pub fn router(state: Arc<ServerState>) -> Router {
    let static_dir = PathBuf::from(&state.blog.config.static_dir);

    let mut app = Router::new()
        .route("/", get(index_handler))
        .route("/posts", get(posts_handler))
        .route("/blog/:date/:link", get(post_handler))
        .nest_service("/public", ServeDir::new(&static_dir));

    for file in ROOT_FILES {
        app = app.route_service(&format!("/{}", file), ServeFile::new(static_dir.join(file)));
    }

    app.fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(blog: Blog, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState::new(blog)?);
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    match state.templates.render_index() {
        Ok(html) => Html(html).into_response(),
        Err(e) => state.error_response(e.into()),
    }
}

async fn posts_handler(State(state): State<Arc<ServerState>>) -> Response {
    let result = match state.blog.posts().await {
        Ok(page) => state.templates.render_posts(&page).map_err(Error::from),
        Err(e) => Err(e),
    };

    match result {
        Ok(html) => Html(html).into_response(),
        Err(e) => state.error_response(e),
    }
}

async fn post_handler(
    State(state): State<Arc<ServerState>>,
    Path((date, link)): Path<(String, String)>,
) -> Response {
    let result = match state.blog.post(&date, &link).await {
        Ok(post) => state.templates.render_post(&post).map_err(Error::from),
        Err(e) => Err(e),
    };

    match result {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::debug!(date = %date, link = %link, "Post page failed");
            state.error_response(e)
        }
    }
}

async fn not_found_handler(State(state): State<Arc<ServerState>>) -> Response {
    state.error_page(StatusCode::NOT_FOUND, "Page not found.")
}
