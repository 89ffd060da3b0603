use axum::response::Html;

/// GET / -> static dashboard linking to the three management pages.
pub async fn dashboard_handler() -> Html<String> {
    Html(crate::render::index_page())
}
