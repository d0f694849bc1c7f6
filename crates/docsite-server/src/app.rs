//! Router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::get_root))
        .route("/about", get(handlers::get_about))
        .route("/docs", get(handlers::get_docs_index))
        .route("/docs/{docSection}", get(handlers::get_doc_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use docsite_content::ContentTable;
    use docsite_render::NullHighlighter;
    use docsite_site::SiteOptions;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    fn test_state() -> Arc<AppState> {
        let table = ContentTable::from_json(
            r##"{
                "intro": {
                    "title": "Introduction",
                    "description": "Where to start",
                    "image": "/images/intro.png",
                    "markdown": "# Welcome\n\nHello."
                },
                "about": {
                    "title": "About",
                    "description": "About this site",
                    "image": "/images/about.png",
                    "markdown": "We write docs."
                },
                "404": {
                    "title": "Page Not Found",
                    "description": "Nothing here",
                    "image": "/images/404.png",
                    "markdown": "That page does not exist."
                }
            }"##,
        )
        .unwrap();

        Arc::new(AppState {
            table,
            options: SiteOptions::default(),
            highlighter: Arc::new(NullHighlighter),
        })
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let app = create_router(test_state());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_doc_page_renders() {
        let (status, body) = get("/docs/intro").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Introduction</h1>"));
        assert!(body.contains("<title>Blockstack - Introduction</title>"));
    }

    #[tokio::test]
    async fn test_unknown_section_serves_not_found_page() {
        let (status, body) = get("/docs/ghost").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("That page does not exist."));
    }

    #[tokio::test]
    async fn test_about_page_has_no_back_link() {
        let (status, body) = get("/about").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>About</h1>"));
        assert!(!body.contains("Back to Docs"));
    }

    #[tokio::test]
    async fn test_docs_index_lists_pages() {
        let (status, body) = get("/docs").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"href="/docs/intro""#));
    }

    #[tokio::test]
    async fn test_root_redirects_to_docs() {
        let app = create_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/docs");
    }
}
