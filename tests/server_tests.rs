use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use schema_blog::config::SiteConfig;
use schema_blog::server::{router, ServerState};
use schema_blog::Blog;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const POSTS: &str = r#"{"@type": "Blog", "blogPosts": [
    {"headline": "Alpha", "url": "https://www.example.com/blog/2023-04-01/alpha", "dateCreated": "2023-04-01T10:00:00+00:00", "wordCount": 10},
    {"headline": "Beta", "url": "https://www.example.com/blog/2023-03-01/beta", "dateCreated": "2023-03-01T10:00:00+00:00", "wordCount": 20}
]}"#;

const POST: &str = r##"{"headline": "Alpha", "url": "https://www.example.com/blog/2023-04-01/alpha", "dateCreated": "2023-04-01T10:00:00+00:00", "wordCount": 10, "articleBody": "# Alpha\n\nHello *world*."}"##;

fn app(config: SiteConfig) -> Router {
    let blog = Blog::new(config).unwrap();
    router(Arc::new(ServerState::new(blog).unwrap()))
}

fn config_for(server: &MockServer) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.api.base = server.uri();
    config.canonical_base = "https://www.example.com/blog/".to_string();
    config
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn posts_page_lists_posts_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(POSTS))
        .mount(&server)
        .await;

    let (status, body) = get(app(config_for(&server)), "/posts").await;

    assert_eq!(status, StatusCode::OK);
    let alpha = body.find("Alpha").unwrap();
    let beta = body.find("Beta").unwrap();
    assert!(alpha < beta);
    assert!(body.contains(r#"href="/blog/2023-03-01/beta""#));
    assert!(body.contains("application/ld+json"));
}

#[tokio::test]
async fn post_page_renders_article_and_schema() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/post/2023-04-01/alpha"))
        .respond_with(ResponseTemplate::new(200).set_body_string(POST))
        .mount(&server)
        .await;

    let (status, body) = get(app(config_for(&server)), "/blog/2023-04-01/alpha").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Alpha</h1>"));
    assert!(body.contains("<em>world</em>"));
    assert!(body.contains("01 April 2023"));
    assert!(body.contains(
        r#"<link rel="canonical" href="https://www.example.com/blog/2023-04-01/alpha">"#
    ));
    assert!(body.contains(r##""articleBody": "# Alpha\n\nHello *world*.""##));
}

#[tokio::test]
async fn malformed_upstream_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"blogPosts\": "))
        .mount(&server)
        .await;

    let app = app(config_for(&server));
    let (status, _) = get(app.clone(), "/posts").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    // The failure is scoped to its request
    let (status, _) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn slow_upstream_is_gateway_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/post/2023-04-01/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(POST)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.api.timeout_secs = 1;

    let (status, body) = get(app(config), "/blog/2023-04-01/slow").await;
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert!(body.contains("504"));
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let mut config = SiteConfig::default();
    config.api.base = "http://127.0.0.1:9".to_string();

    let (status, _) = get(app(config), "/posts").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, body) = get(app(SiteConfig::default()), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found."));
}

#[tokio::test]
async fn static_root_files_are_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("robots.txt"), "User-agent: *\n").unwrap();

    let mut config = SiteConfig::default();
    config.static_dir = dir.path().to_string_lossy().into_owned();

    let (status, body) = get(app(config), "/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "User-agent: *\n");
}
