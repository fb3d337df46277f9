use axum::{extract::State, Form, Json};

use crate::{
    app::AppState,
    error::AppResult,
    model::{ScrapeForm, ScrapeResponse},
    service,
};

pub async fn scrape_itinerary(
    State(state): State<AppState>,
    Form(form): Form<ScrapeForm>,
) -> AppResult<Json<ScrapeResponse>> {
    let response = service::itinerary::scrape(&state.fetcher, form).await?;
    Ok(Json(response))
}
