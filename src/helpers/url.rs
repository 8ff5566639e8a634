//! URL helper functions

/// Join a base and path segments with exactly one `/` between each part.
///
/// Segments are used as given: nothing is encoded or validated.
fn join(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(segment);
    }
    url
}

/// Canonical URL of a post, built from the requested path segments
///
/// # Examples
/// ```ignore
/// canonical_url("https://www.example.com/blog/", "2023-04-01", "my-post")
/// // -> "https://www.example.com/blog/2023-04-01/my-post"
/// ```
pub fn canonical_url(base: &str, date: &str, link: &str) -> String {
    join(base, &[date, link])
}

/// Content API endpoint for the post listing
pub fn posts_endpoint(api_base: &str) -> String {
    join(api_base, &["posts"])
}

/// Content API endpoint for a single post
pub fn post_endpoint(api_base: &str, date: &str, link: &str) -> String {
    join(api_base, &["post", date, link])
}

/// Path component of an absolute URL, or an empty string if it does not parse
///
/// # Examples
/// ```ignore
/// url_path("https://www.example.com/blog/2023-04-01/my-post") // -> "/blog/2023-04-01/my-post"
/// ```
pub fn url_path(url: &str) -> String {
    match ::url::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => String::new(),
    }
}

/// Make a JSON document safe to place inside a `<script>` element.
///
/// `<`, `>` and `&` can only occur inside JSON strings, so replacing them
/// with `\u` escapes leaves the decoded value unchanged.
pub fn script_safe_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}
