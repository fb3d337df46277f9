use anyhow::{bail, Context, Result};
use url::Url;

/// Parses a user-supplied page address.
///
/// Only http(s) URLs are accepted. The fragment is dropped since it never
/// reaches the server anyway.
pub fn normalize_page_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).with_context(|| format!("invalid url: {raw}"))?;

    match url.scheme() {
        "http" | "https" => {}
        other => bail!("unsupported scheme {other:?} in {raw}"),
    }
    if url.host_str().map_or(true, str::is_empty) {
        bail!("missing host in {raw}");
    }

    url.set_fragment(None);
    Ok(url)
}

/// Top-level domain of the URL host, used as an encoding-detection hint.
pub fn tld(url: &Url) -> Option<&str> {
    url.domain()?.rsplit('.').next().filter(|tld| !tld.is_empty())
}
