use std::time::Duration;

use anyhow::{anyhow, Context};
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, REFERER},
    redirect, Client,
};
use tracing::debug;
use url::Url;

use crate::{config::FetcherConfig, util::url_norm};

/// Downloads itinerary pages and decodes them to text.
#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(mut config: FetcherConfig) -> anyhow::Result<Self> {
        if config.request_timeout_secs == 0 {
            config.request_timeout_secs = 15;
        }

        let mut headers = HeaderMap::new();
        if let Some(referer) = config.referer.as_deref() {
            headers.insert(
                REFERER,
                HeaderValue::from_str(referer).context("invalid referer header")?,
            );
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .redirect(redirect::Policy::limited(config.max_redirects))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &Url) -> anyhow::Result<String> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("unexpected status {}", status));
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let bytes = response.bytes().await?;

        debug!(
            url = %final_url,
            status = status.as_u16(),
            bytes = bytes.len(),
            "page downloaded"
        );

        Ok(decode_body(&bytes, content_type.as_deref(), &final_url))
    }
}

/// Decodes a page body using the declared charset, or a detected one when the
/// header has none we recognise.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>, url: &Url) -> String {
    let encoding = content_type
        .and_then(charset_param)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or_else(|| {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            let tld = url_norm::tld(url).map(str::as_bytes);
            detector.guess(tld, true)
        });

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        debug!(encoding = used.name(), "page body contained malformed sequences");
    }
    text.into_owned()
}

fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://www.pac-group.net/trip").unwrap()
    }

    #[test]
    fn charset_from_content_type() {
        assert_eq!(charset_param("text/html; charset=Big5"), Some("Big5"));
        assert_eq!(charset_param("text/html;Charset=\"utf-8\""), Some("utf-8"));
        assert_eq!(charset_param("text/html"), None);
    }

    #[test]
    fn decodes_declared_big5() {
        let (bytes, _, _) = encoding_rs::BIG5.encode("台北 台中 早餐");
        let text = decode_body(&bytes, Some("text/html; charset=big5"), &url());
        assert_eq!(text, "台北 台中 早餐");
    }

    #[test]
    fn utf8_without_charset_is_detected() {
        let html = "<div id=\"TRIP_BLOCK\">Day1 2024/06/10 台北→台中 早餐 飯店內</div>";
        let text = decode_body(html.as_bytes(), Some("text/html"), &url());
        assert_eq!(text, html);
    }

    #[test]
    fn client_builds_from_defaults() {
        assert!(PageFetcher::new(FetcherConfig::default()).is_ok());
    }
}
