use std::sync::LazyLock;

use axum::{
    body::{Body, to_bytes},
    http::header,
    response::Response,
};

static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
    keep_closing_tags: true,
    keep_html_and_head_opening_tags: true,
    minify_css: true,
    minify_js: true,
    ..Default::default()
});

fn is_html(response: &Response<Body>) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/html"))
}

/// Minify HTML responses in release builds.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    if cfg!(debug_assertions) || !is_html(&response) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!("Failed to buffer HTML for minification: {err}");
            return Response::from_parts(parts, Body::empty());
        }
    };

    let minified = minify_html::minify(&bytes, &MINIFY_CFG);
    parts.headers.remove(header::CONTENT_LENGTH);

    Response::from_parts(parts, Body::from(minified))
}
