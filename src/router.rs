use crate::{routes, state};
use axum::{extract::DefaultBodyLimit, http, Router};
use tower_http::{propagate_header, trace};

pub fn create_router(state: state::AppState) -> Router {
    let body_limit = state.config.body_limit;

    Router::new()
        .merge(routes::all_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            trace::TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().include_headers(true))
                .on_request(trace::DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(tracing::Level::INFO)),
        )
        .layer(propagate_header::PropagateHeaderLayer::new(
            http::header::HeaderName::from_static("x-request-id"),
        ))
        .with_state(state)
}
