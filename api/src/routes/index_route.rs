//! GET / — the single-page form.

use axum::response::Html;

/// Serves the embedded page; everything interactive happens against the
/// JSON routes.
pub async fn index_page() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}
