use serde::{Deserialize, Serialize};

use crate::itinerary::DayRecord;

#[derive(Debug, Default, Deserialize)]
pub struct ScrapeForm {
    pub url: Option<String>,
}

/// JSON envelope returned by `POST /scrape`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ScrapeResponse {
    Success {
        html_output: String,
        days: Vec<DayRecord>,
    },
    Error {
        message: String,
    },
}

impl ScrapeResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_is_tagged_by_status() {
        let ok = serde_json::to_value(ScrapeResponse::Success {
            html_output: "<div></div>".into(),
            days: Vec::new(),
        })
        .unwrap();
        assert_eq!(ok["status"], "success");
        assert_eq!(ok["html_output"], "<div></div>");

        let err = serde_json::to_value(ScrapeResponse::error("請輸入網址")).unwrap();
        assert_eq!(
            err,
            serde_json::json!({ "status": "error", "message": "請輸入網址" })
        );
    }
}
