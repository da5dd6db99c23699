use axum::response::Html;

/// The single-page UI, compiled into the binary.
pub const INDEX_HTML: &str = include_str!("../../assets/index.html");

// GET / and GET /index.html
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
