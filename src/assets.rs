use axum::{
    body::Body,
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Stylesheets and scripts compiled into the binary.
#[derive(RustEmbed)]
#[folder = "static/"]
struct Assets;

/// GET /static/{*path}
pub async fn serve(Path(path): Path<String>) -> Response {
    let Some(content) = Assets::get(&path) else {
        return (StatusCode::NOT_FOUND, "404 Not Found").into_response();
    };

    let mime = mime_guess::from_path(&path).first_or_octet_stream();

    (
        [(header::CONTENT_TYPE, mime.as_ref().to_owned())],
        Body::from(content.data),
    )
        .into_response()
}
