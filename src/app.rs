use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{api, config::AppConfig, fetcher::PageFetcher};

#[derive(Clone)]
pub struct AppState {
    pub fetcher: PageFetcher,
}

pub fn build_router(config: &AppConfig) -> anyhow::Result<Router> {
    let fetcher = PageFetcher::new(config.fetcher.clone())?;
    let state = AppState { fetcher };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let middleware = ServiceBuilder::new()
        .layer(middleware::from_fn(crate::middleware::assign_trace_id))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let router = Router::new()
        .route("/", get(api::index::index))
        .route("/healthz", get(api::health::health_check))
        .route("/scrape", post(api::scrape::scrape_itinerary))
        .layer(middleware)
        .with_state(state);

    Ok(router)
}
