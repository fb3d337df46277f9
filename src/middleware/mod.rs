use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

pub const TRACE_ID_HEADER: &str = "X-Trace-Id";

/// Tags each request with a fresh id, both in its tracing span and in the
/// response headers.
pub async fn assign_trace_id(req: Request<Body>, next: Next) -> Response {
    let trace_id = Uuid::new_v4().to_string();
    let span = tracing::info_span!("request", trace_id = %trace_id);

    let mut res = next.run(req).instrument(span).await;
    res.headers_mut().insert(
        TRACE_ID_HEADER,
        HeaderValue::from_str(&trace_id).unwrap_or(HeaderValue::from_static("invalid")),
    );
    res
}
