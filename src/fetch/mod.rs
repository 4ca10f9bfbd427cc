//! Retrieval of the published directory document.
//!
//! The operator site lists the current directory PDF on a download page
//! with a versioned filename. The client scrapes that page for the link
//! and downloads the document; everything else about the document
//! (decryption, text extraction) lives in the [`crate::pdf`] module.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use thiserror::Error;
use url::Url;

/// Download page listing the current extension directory PDF.
pub const DEFAULT_DOWNLOAD_PAGE: &str = "https://hamvoip.nl/download.php";

const USER_AGENT: &str = concat!("hamdir/", env!("CARGO_PKG_VERSION"));

/// The versioned PDF link on the download page. The remote filename
/// really is spelled "extentions".
static PDF_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"extentions_(\d+\.\d+)\.pdf").unwrap());

/// Errors that can occur while retrieving the directory document.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("no directory PDF link found on {0}")]
    NoDownloadLink(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// HTTP client for the directory download page.
pub struct DirectoryClient {
    client: Client,
    download_page: String,
}

impl DirectoryClient {
    /// Create a new client for the given download page.
    pub fn new(
        download_page: &str,
        timeout: Duration,
        user_agent: Option<&str>,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent.unwrap_or(USER_AGENT))
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            download_page: download_page.to_string(),
        })
    }

    /// Locate the current versioned directory PDF on the download page.
    ///
    /// Scans every anchor on the page and returns the first href that
    /// matches the versioned filename, resolved against the page URL.
    pub async fn latest_pdf_url(&self) -> Result<Url, FetchError> {
        let response = self.client.get(&self.download_page).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.download_page.clone(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;

        let href = find_pdf_href(&body)
            .ok_or_else(|| FetchError::NoDownloadLink(self.download_page.clone()))?;

        let base = Url::parse(&self.download_page)?;
        let resolved = base.join(&href)?;

        if let Some(caps) = PDF_LINK.captures(&href) {
            tracing::info!(
                "found directory version {} at {}",
                &caps[1],
                resolved
            );
        }

        Ok(resolved)
    }

    /// Download the directory PDF, returning its raw bytes.
    pub async fn download(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        tracing::debug!("downloading {}", url);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Find the versioned PDF href among the anchors of the download page.
fn find_pdf_href(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a[href]").expect("static selector");

    document
        .select(&anchors)
        .filter_map(|a| a.value().attr("href"))
        .find(|href| PDF_LINK.is_match(href))
        .map(|href| href.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_versioned_link() {
        let html = r#"
            <html><body>
            <a href="about.php">About</a>
            <a href="downloads/extentions_4.2.pdf">Download</a>
            </body></html>
        "#;
        assert_eq!(
            find_pdf_href(html).as_deref(),
            Some("downloads/extentions_4.2.pdf")
        );
    }

    #[test]
    fn ignores_pages_without_the_link() {
        let html = r#"<a href="downloads/manual.pdf">Manual</a>"#;
        assert!(find_pdf_href(html).is_none());
    }

    #[test]
    fn resolves_relative_href_against_page_url() {
        let base = Url::parse(DEFAULT_DOWNLOAD_PAGE).unwrap();
        let resolved = base.join("downloads/extentions_4.2.pdf").unwrap();
        assert_eq!(
            resolved.as_str(),
            "https://hamvoip.nl/downloads/extentions_4.2.pdf"
        );
    }
}
