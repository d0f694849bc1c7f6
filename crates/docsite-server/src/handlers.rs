//! Request handlers.
//!
//! Each handler resolves the request to a page key through the content
//! table, composes the document, and replies with `text/html`. Resolution
//! falls back to the not-found record, so handlers are infallible.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use docsite_content::{ABOUT_ROUTE, DOC_SECTION_PARAM, NOT_FOUND_KEY, resolve_page_key};
use docsite_site::{compose_index, compose_page};

use crate::state::AppState;

/// Handle `GET /`.
pub(crate) async fn get_root(State(state): State<Arc<AppState>>) -> Redirect {
    Redirect::permanent(&state.options.docs_prefix)
}

/// Handle `GET /docs`.
pub(crate) async fn get_docs_index(State(state): State<Arc<AppState>>) -> Html<String> {
    let view = compose_index(&state.table, &state.options);
    Html(view.html)
}

/// Handle `GET /about`.
pub(crate) async fn get_about(State(state): State<Arc<AppState>>) -> Html<String> {
    let key = resolve_page_key(ABOUT_ROUTE, &HashMap::new(), &state.table);
    let view = compose_page(&state.table, &key, state.highlighter.as_ref(), &state.options);
    Html(view.html)
}

/// Handle `GET /docs/{docSection}`.
pub(crate) async fn get_doc_page(
    Path(doc_section): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let path = format!("{}/{doc_section}", state.options.docs_prefix);
    let params = HashMap::from([(DOC_SECTION_PARAM.to_owned(), doc_section)]);

    let key = resolve_page_key(&path, &params, &state.table);
    let view = compose_page(&state.table, &key, state.highlighter.as_ref(), &state.options);

    let status = if key == NOT_FOUND_KEY {
        tracing::debug!(path = %path, "Serving not-found page");
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    (status, Html(view.html)).into_response()
}
