use askama::Template;

use super::DayRecord;

#[derive(Template)]
#[template(path = "day_card.html")]
struct DayCardTemplate<'a> {
    day: &'a DayRecord,
}

/// Renders one Bootstrap card per day, joined by newlines in input order.
///
/// Field text is escaped by the template.
pub fn render_cards(days: &[DayRecord]) -> Result<String, askama::Error> {
    let cards = days
        .iter()
        .map(|day| DayCardTemplate { day }.render())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(cards.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DayRecord {
        DayRecord {
            date_label: "06/10(一) DAY1".into(),
            route: "台北→台中".into(),
            breakfast: "飯店內".into(),
            lunch: "無".into(),
            dinner: "無".into(),
        }
    }

    #[test]
    fn card_contains_every_field() {
        let html = render_cards(&[sample()]).unwrap();
        assert!(html.contains("06/10(一) DAY1"));
        assert!(html.contains("台北→台中"));
        assert!(html.contains("飯店內"));
        assert_eq!(html.matches('無').count(), 2);
    }

    #[test]
    fn meals_render_in_fixed_order() {
        let html = render_cards(&[sample()]).unwrap();
        let breakfast = html.find("早餐：").unwrap();
        let lunch = html.find("中餐：").unwrap();
        let dinner = html.find("晚餐：").unwrap();
        assert!(breakfast < lunch && lunch < dinner);
    }

    #[test]
    fn cards_follow_input_order() {
        let mut second = sample();
        second.date_label = "06/11(二) DAY2".into();
        let html = render_cards(&[sample(), second]).unwrap();
        assert_eq!(html.matches("class=\"card mb-4").count(), 2);
        assert!(html.find("DAY1").unwrap() < html.find("DAY2").unwrap());
    }

    #[test]
    fn scraped_text_is_escaped() {
        let mut day = sample();
        day.route = "<script>alert(1)</script>".into();
        let html = render_cards(&[day]).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));

        let mut day = sample();
        day.lunch = "台中&南投".into();
        let html = render_cards(&[day]).unwrap();
        assert!(html.contains("台中&amp;南投"));
    }

    #[test]
    fn no_days_render_nothing() {
        assert_eq!(render_cards(&[]).unwrap(), "");
    }
}
