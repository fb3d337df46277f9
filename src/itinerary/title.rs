use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Weekday glyphs indexed by days since Monday.
const WEEKDAY_GLYPHS: [char; 7] = ['一', '二', '三', '四', '五', '六', '日'];

static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Day\s*(\d+)\s*(\d{4}/\d{2}/\d{2})\s*(.+)").expect("title pattern is valid")
});

/// Splits a day title such as `Day1 2024/06/10 台北→台中` into its date label
/// and route.
///
/// Titles that do not follow the pattern, or that name a date that does not
/// exist, come back unchanged with an empty route.
pub fn parse_title(text: &str) -> (String, String) {
    let text = text.trim();
    match parse_structured(text) {
        Some(parsed) => parsed,
        None => (text.to_string(), String::new()),
    }
}

fn parse_structured(text: &str) -> Option<(String, String)> {
    let caps = TITLE_PATTERN.captures(text)?;
    let day_index = caps.get(1)?.as_str();
    let date = caps.get(2)?.as_str();
    let route = caps.get(3)?.as_str().trim();

    let mut parts = date.split('/');
    let (yyyy, mm, dd) = (parts.next()?, parts.next()?, parts.next()?);
    let calendar = NaiveDate::from_ymd_opt(yyyy.parse().ok()?, mm.parse().ok()?, dd.parse().ok()?)?;
    let weekday = weekday_glyph(calendar);

    Some((format!("{mm}/{dd}({weekday}) DAY{day_index}"), route.to_string()))
}

fn weekday_glyph(date: NaiveDate) -> char {
    WEEKDAY_GLYPHS[date.weekday().num_days_from_monday() as usize]
}
