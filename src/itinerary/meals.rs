/// Placeholder for a meal the page does not mention.
pub const NO_MEAL: &str = "無";

/// The three meal slots of one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meals {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

impl Default for Meals {
    fn default() -> Self {
        Self {
            breakfast: NO_MEAL.to_string(),
            lunch: NO_MEAL.to_string(),
            dinner: NO_MEAL.to_string(),
        }
    }
}

impl Meals {
    /// Files `content` under every slot whose marker appears in `label`.
    ///
    /// The checks are independent: a label carrying two markers fills two
    /// slots. Later cells overwrite earlier ones.
    pub fn record(&mut self, label: &str, content: &str) {
        if label.contains('早') {
            self.breakfast = content.to_string();
        }
        if label.contains('中') {
            self.lunch = content.to_string();
        }
        if label.contains('晚') {
            self.dinner = content.to_string();
        }
    }
}
