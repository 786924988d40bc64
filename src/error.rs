// src/error.rs
//
// The only error the scraping core lets out: the page couldn't be had.
// Anything wrong *inside* a page degrades to defaults instead.

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },
    #[error("could not read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// HTTP status for rejected responses, if that's what this was.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_url() {
        let e = FetchError::Status { status: 404, url: s!("https://swgoh.gg/u/nobody/collection/") };
        assert_eq!(e.status(), Some(404));
        assert_eq!(e.to_string(), "HTTP 404 for https://swgoh.gg/u/nobody/collection/");
    }
}
