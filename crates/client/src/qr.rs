//! Scraper for the cross-device login QR page.
//!
//! The terminal serves a small HTML page per mai-id whose only `<img>`
//! tag points at the QR image. We fetch the page, pull the `src`
//! attribute, and resolve the relative `../img/` form against the image
//! base URL.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::error::ClientError;

/// Base URL of the per-id QR pages.
pub const DEFAULT_QR_PAGE_BASE_URL: &str = "http://wq.sys-allnet.cn/qrcode/req/";
/// Base URL the relative image paths resolve against.
pub const DEFAULT_QR_IMAGE_BASE_URL: &str = "http://wq.sys-allnet.cn/qrcode/img/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

static IMG_SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img[^>]*\bsrc\s*=\s*["']([^"']+)["']"#).expect("valid regex")
});

static MAI_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/qrcode/req/([^.]+)\.html").expect("valid regex"));

/// Fetches QR pages and resolves the embedded image URL.
#[derive(Debug, Clone)]
pub struct QrScraper {
    http: reqwest::Client,
    page_base_url: String,
    image_base_url: String,
}

impl QrScraper {
    pub fn new(
        page_base_url: impl Into<String>,
        image_base_url: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .connect_timeout(REQUEST_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            page_base_url: page_base_url.into(),
            image_base_url: image_base_url.into(),
        })
    }

    /// The QR page URL for a mai-id.
    pub fn page_url(&self, mai_id: &str) -> String {
        format!("{}{}.html", self.page_base_url, mai_id)
    }

    /// Fetch the QR page for `mai_id` and return the absolute image URL.
    pub async fn fetch_image_url(&self, mai_id: &str) -> Result<String, ClientError> {
        let url = self.page_url(mai_id);
        tracing::debug!(%url, "Fetching QR page");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                context: url,
            });
        }
        let html = response.text().await?;
        extract_image_url(&html, &self.image_base_url)
    }
}

/// Pull the first `<img>` `src` out of `html` and resolve it against
/// `image_base`. Relative `../img/` paths are rewritten onto the base;
/// anything else is taken as-is.
pub fn extract_image_url(html: &str, image_base: &str) -> Result<String, ClientError> {
    let captures = IMG_SRC_RE.captures(html).ok_or(ClientError::NoImageTag)?;
    let src = &captures[1];
    match src.strip_prefix("../img/") {
        Some(rest) => Ok(format!("{image_base}{rest}")),
        None => Ok(src.to_owned()),
    }
}

/// Normalize a scanned value to a bare mai-id.
///
/// Full page URLs are reduced to the id segment. A value that looks like
/// a page URL but does not match the expected shape yields the empty
/// string; anything else passes through unchanged.
pub fn extract_mai_id_from_url(input: &str) -> String {
    if let Some(captures) = MAI_ID_RE.captures(input) {
        return captures[1].to_owned();
    }
    if input.contains("qrcode/req/") {
        return String::new();
    }
    input.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_src_resolves_against_image_base() {
        let html = r#"<html><body><img src="../img/abc123.png"></body></html>"#;
        let url = extract_image_url(html, DEFAULT_QR_IMAGE_BASE_URL).unwrap();
        assert_eq!(url, "http://wq.sys-allnet.cn/qrcode/img/abc123.png");
    }

    #[test]
    fn absolute_src_passes_through() {
        let html = r#"<img src="http://cdn.example.com/qr.png">"#;
        let url = extract_image_url(html, DEFAULT_QR_IMAGE_BASE_URL).unwrap();
        assert_eq!(url, "http://cdn.example.com/qr.png");
    }

    #[test]
    fn single_quoted_and_spaced_attributes_match() {
        let html = r#"<IMG class="qr" SRC = '../img/x.png' alt="qr">"#;
        let url = extract_image_url(html, "https://base/").unwrap();
        assert_eq!(url, "https://base/x.png");
    }

    #[test]
    fn page_without_image_is_an_error() {
        let err = extract_image_url("<html><body>nothing</body></html>", "https://base/")
            .unwrap_err();
        assert!(matches!(err, ClientError::NoImageTag));
    }

    #[test]
    fn page_url_reduces_to_id() {
        let id = extract_mai_id_from_url("http://wq.sys-allnet.cn/qrcode/req/MAID12345.html");
        assert_eq!(id, "MAID12345");
    }

    #[test]
    fn malformed_page_url_yields_empty() {
        assert_eq!(extract_mai_id_from_url("http://wq.sys-allnet.cn/qrcode/req/"), "");
    }

    #[test]
    fn bare_id_passes_through() {
        assert_eq!(extract_mai_id_from_url("MAID12345"), "MAID12345");
    }
}
