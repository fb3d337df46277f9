use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::{parse_title, DayRecord, ExtractionFailure, ExtractionResult, Meals};
use crate::util::html::{joined_text, stripped_text};

const MEAL_CONTENT_SEPARATOR: &str = "／";

static SELECTORS: LazyLock<Selectors> = LazyLock::new(Selectors::new);

struct Selectors {
    container: Selector,
    day_title: Selector,
    meal_info: Selector,
    meal_cell: Selector,
    meal_label: Selector,
    meal_content: Selector,
}

impl Selectors {
    fn new() -> Self {
        Self {
            container: parse("#TRIP_BLOCK"),
            day_title: parse(".day_title .sub_add_img"),
            meal_info: parse(".day-group + .info"),
            meal_cell: parse(".col-lg-3"),
            meal_label: parse(".bg"),
            meal_content: parse(".text"),
        }
    }
}

fn parse(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|err| panic!("invalid selector {css:?}: {err}"))
}

/// Pulls the ordered day list out of an itinerary page.
///
/// Titles and meal blocks are paired by position only; the page carries no
/// key linking the two, so their counts must agree.
pub fn extract(document: &Html) -> ExtractionResult {
    let selectors = &*SELECTORS;

    let Some(container) = document.select(&selectors.container).next() else {
        tracing::warn!("itinerary container not found");
        return Err(ExtractionFailure::MissingContainer);
    };

    let titles: Vec<ElementRef<'_>> = container.select(&selectors.day_title).collect();
    let infos: Vec<ElementRef<'_>> = container.select(&selectors.meal_info).collect();

    if titles.len() != infos.len() {
        tracing::warn!(
            titles = titles.len(),
            infos = infos.len(),
            "day titles and meal blocks are misaligned"
        );
        return Err(ExtractionFailure::CountMismatch {
            titles: titles.len(),
            infos: infos.len(),
        });
    }

    if titles.is_empty() {
        tracing::warn!("itinerary container holds no days");
        return Err(ExtractionFailure::EmptyItinerary);
    }

    let days: Vec<DayRecord> = titles
        .iter()
        .zip(&infos)
        .map(|(title, info)| build_day(selectors, title, info))
        .collect();

    tracing::debug!(days = days.len(), "itinerary extracted");
    Ok(days)
}

fn build_day(selectors: &Selectors, title: &ElementRef<'_>, info: &ElementRef<'_>) -> DayRecord {
    let (date_label, route) = parse_title(&stripped_text(title));
    let Meals {
        breakfast,
        lunch,
        dinner,
    } = collect_meals(selectors, info);

    DayRecord {
        date_label,
        route,
        breakfast,
        lunch,
        dinner,
    }
}

fn collect_meals(selectors: &Selectors, info: &ElementRef<'_>) -> Meals {
    let mut meals = Meals::default();

    for cell in info.select(&selectors.meal_cell) {
        let label = cell.select(&selectors.meal_label).next();
        let content = cell.select(&selectors.meal_content).next();
        let (Some(label), Some(content)) = (label, content) else {
            continue;
        };

        let label = stripped_text(&label);
        let content = joined_text(&content, MEAL_CONTENT_SEPARATOR)
            .replace('\n', "")
            .trim()
            .to_string();
        meals.record(&label, &content);
    }

    meals
}
