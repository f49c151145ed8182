//! Directory-listing client for the DWD open-data server
//!
//! The server publishes each variable's files under a plain HTML index page.
//! This module issues a single GET per directory and extracts the hyperlink
//! targets that match an extension and name-prefix filter. Pure I/O
//! boundary; availability decisions live in the resolver.

use std::collections::HashSet;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::constants::{http, selectors};
use crate::errors::{ListingError, ListingResult};

/// Source of published file names for a server directory
///
/// Abstracts the HTTP fetcher so availability resolution can be exercised
/// against an in-memory listing in tests.
#[async_trait]
pub trait ListingSource {
    /// Return the absolute URLs of all entries under `directory_url` whose
    /// link targets end with `extension` and start with `prefix`.
    ///
    /// # Errors
    ///
    /// Returns `ListingError` if the listing cannot be fetched or the server
    /// answers with a non-success status.
    async fn list_published_files(
        &self,
        directory_url: &str,
        extension: &str,
        prefix: &str,
    ) -> ListingResult<HashSet<String>>;
}

/// HTTP client for DWD directory index pages
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    client: Client,
}

impl DirectoryClient {
    /// Create a client with the application's user agent and timeouts
    ///
    /// # Errors
    ///
    /// Returns `ListingError::Http` if the underlying client cannot be built
    pub fn new() -> ListingResult<Self> {
        let client = Client::builder()
            .user_agent(http::USER_AGENT)
            .timeout(http::DEFAULT_TIMEOUT)
            .connect_timeout(http::CONNECT_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ListingSource for DirectoryClient {
    async fn list_published_files(
        &self,
        directory_url: &str,
        extension: &str,
        prefix: &str,
    ) -> ListingResult<HashSet<String>> {
        let url = Url::parse(directory_url).map_err(|_| ListingError::InvalidUrl {
            url: directory_url.to_string(),
        })?;

        // One best-effort request; retry policy is the caller's concern
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ListingError::Status {
                status: response.status().as_u16(),
                url: directory_url.to_string(),
            });
        }

        let body = response.text().await?;
        let files = extract_file_urls(&body, directory_url, extension, prefix)?;
        tracing::debug!(
            "{} matching entries listed under {}",
            files.len(),
            directory_url
        );

        Ok(files)
    }
}

/// Pull matching anchor targets out of an HTML index page, resolved to
/// absolute URLs against the directory they were listed under
fn extract_file_urls(
    html: &str,
    directory_url: &str,
    extension: &str,
    prefix: &str,
) -> ListingResult<HashSet<String>> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse(selectors::ANCHOR_SELECTOR).map_err(|_| ListingError::InvalidSelector {
            selector: selectors::ANCHOR_SELECTOR.to_string(),
        })?;

    let mut files = HashSet::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if href.ends_with(extension) && href.starts_with(prefix) {
                files.insert(format!("{}{}", directory_url, href));
            }
        }
    }

    Ok(files)
}
