// src/core/net.rs
//
// Blocking HTTP GET → parsed document. No retries; a failure goes straight back to the caller.

use std::time::Duration;

use scraper::Html;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

use super::doc::parse_document;

/// Anything that can turn a URL into a parsed page.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Html, FetchError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &str) -> Result<Html, FetchError> {
        (**self).fetch(url)
    }
}

/// The real thing: `reqwest` blocking client.
pub struct HttpFetcher {
    http: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { http })
    }

    /// Raw body text for `url`.
    pub fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
        }
        resp.text().map_err(|source| FetchError::Body { url: s!(url), source })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Html, FetchError> {
        logd!("Net: GET {url}");
        let body = self.get_text(url)?;
        logd!("Net: {} bytes from {url}", body.len());
        Ok(parse_document(&body))
    }
}
