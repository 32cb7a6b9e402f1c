use axum::{
    routing::get,
    Router,
    extract::{Query, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::models::{ShelfQuery, ShelfResponse};
use crate::error::Result;
use crate::{extract, feed, params, AppState};

const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/goodreads-shelf", get(shelf_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        )
        .fallback(index_handler)
        .with_state(app_state)
}

async fn shelf_handler(
    State(state): State<AppState>,
    Query(query): Query<ShelfQuery>,
) -> Result<Json<ShelfResponse>> {
    let request = params::validate(&query)?;
    tracing::info!(user_id = %request.user_id, shelf = %request.shelf, "shelf request");

    let xml = feed::fetch_feed(
        &state.config.upstream_base,
        &request,
        state.config.max_feed_bytes,
    )
    .await?;

    let books = extract::parse_feed(&xml);
    tracing::info!(user_id = %request.user_id, count = books.len(), "shelf parsed");

    Ok(Json(ShelfResponse { books }))
}

/// Everything that is not the API serves the picker page, GET only.
async fn index_handler(method: Method) -> Response {
    if method != Method::GET {
        return (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response();
    }

    let mut response = Html(INDEX_HTML).into_response();
    for (name, value) in security_headers() {
        response.headers_mut().insert(name, value);
    }
    response
}

fn security_headers() -> Vec<(header::HeaderName, HeaderValue)> {
    vec![
        (
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(
                "default-src 'self'; \
                 script-src 'self' 'unsafe-inline'; \
                 style-src 'unsafe-inline' 'self'; \
                 connect-src 'self' https://www.goodreads.com; \
                 img-src 'self' data:; \
                 navigate-to 'self' https://www.goodreads.com; \
                 base-uri 'none'; \
                 form-action 'none'; \
                 frame-ancestors 'none'",
            ),
        ),
        (header::REFERRER_POLICY, HeaderValue::from_static("no-referrer")),
        (header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        (
            header::HeaderName::from_static("permissions-policy"),
            HeaderValue::from_static("geolocation=(), camera=(), microphone=()"),
        ),
    ]
}
