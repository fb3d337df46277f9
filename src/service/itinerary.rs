use anyhow::Context;
use scraper::Html;

use crate::{
    error::{AppError, AppResult},
    fetcher::PageFetcher,
    itinerary::{self, ExtractionFailure},
    model::{ScrapeForm, ScrapeResponse},
    util::url_norm::normalize_page_url,
};

const MISSING_URL: &str = "請輸入網址";
const INVALID_URL: &str = "網址格式不正確";
const FETCH_FAILED: &str = "無法取得網頁內容，請稍後再試";

pub async fn scrape(fetcher: &PageFetcher, form: ScrapeForm) -> AppResult<ScrapeResponse> {
    let raw = form
        .url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(MISSING_URL.into()))?;

    let url = normalize_page_url(&raw).map_err(|err| {
        tracing::debug!(error = %err, "rejected page url");
        AppError::BadRequest(INVALID_URL.into())
    })?;

    let body = fetcher.fetch(&url).await.map_err(|err| {
        tracing::warn!(url = %url, error = ?err, "failed to fetch itinerary page");
        AppError::Upstream(FETCH_FAILED.into())
    })?;

    let response = match summarize_page(&body)? {
        Ok(response) => {
            tracing::info!(url = %url, "itinerary scraped");
            response
        }
        Err(failure) => {
            tracing::info!(url = %url, reason = %failure, "itinerary not usable");
            ScrapeResponse::error(failure.to_string())
        }
    };

    Ok(response)
}

/// Parses a downloaded page and renders its days.
///
/// Kept synchronous: the parsed document is not `Send` and must not be held
/// across an await point. The outer error is a rendering fault; the inner
/// one is a page the extractor cannot use.
pub fn summarize_page(body: &str) -> anyhow::Result<Result<ScrapeResponse, ExtractionFailure>> {
    let document = Html::parse_document(body);
    let days = match itinerary::extract(&document) {
        Ok(days) => days,
        Err(failure) => return Ok(Err(failure)),
    };
    let html_output =
        itinerary::render_cards(&days).context("failed to render itinerary cards")?;
    Ok(Ok(ScrapeResponse::Success { html_output, days }))
}
