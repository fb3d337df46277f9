use scraper::ElementRef;

/// Text fragments under `element`, each trimmed, with blank ones dropped.
fn text_fragments<'a>(element: &ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
}

/// Concatenates the trimmed text fragments of `element` with no separator.
pub fn stripped_text(element: &ElementRef<'_>) -> String {
    text_fragments(element).collect()
}

/// Joins the trimmed text fragments of `element` with `separator`.
pub fn joined_text(element: &ElementRef<'_>, separator: &str) -> String {
    text_fragments(element).collect::<Vec<_>>().join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first<'a>(doc: &'a Html, css: &str) -> ElementRef<'a> {
        let selector = Selector::parse(css).unwrap();
        doc.select(&selector).next().unwrap()
    }

    #[test]
    fn stripped_text_drops_whitespace_between_nodes() {
        let doc = Html::parse_fragment("<p>  Day1 <b> 2024/06/10 </b>\n 台北 </p>");
        assert_eq!(stripped_text(&first(&doc, "p")), "Day12024/06/10台北");
    }

    #[test]
    fn joined_text_uses_separator() {
        let doc = Html::parse_fragment("<div>飯店內<br>  自助式 \n<span>\n</span>早餐</div>");
        assert_eq!(joined_text(&first(&doc, "div"), "／"), "飯店內／自助式／早餐");
    }

    #[test]
    fn joined_text_of_empty_element_is_empty() {
        let doc = Html::parse_fragment("<div>  <span> </span></div>");
        assert_eq!(joined_text(&first(&doc, "div"), "／"), "");
    }
}
