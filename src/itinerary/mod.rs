//! Day-by-day itinerary extraction from tour-booking pages.
//!
//! [`extract`] walks an already-parsed document and pairs each day title with
//! the meal block that follows it; [`render_cards`] turns the resulting
//! records into HTML cards for the front page.

mod extract;
mod meals;
mod render;
mod title;

use serde::Serialize;
use thiserror::Error;

pub use extract::extract;
pub use meals::Meals;
pub use render::render_cards;
pub use title::parse_title;

/// One itinerary day, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    /// `MM/DD(W) DAYn`, or the raw title text when it could not be parsed.
    pub date_label: String,
    pub route: String,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

/// Structural problems that make the whole page unusable.
///
/// The `Display` text is shown to end users as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractionFailure {
    #[error("找不到行程區塊，請確認網址是否正確")]
    MissingContainer,
    #[error("行程天數與餐食區塊數量不符")]
    CountMismatch { titles: usize, infos: usize },
    #[error("行程區塊中沒有任何天數資料")]
    EmptyItinerary,
}

/// Non-empty on success.
pub type ExtractionResult = Result<Vec<DayRecord>, ExtractionFailure>;
