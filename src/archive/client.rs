use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use reqwest::{Client, Response, StatusCode};
use std::error::Error as _;
use std::io;

use super::{ArchiveRequest, FetchError};

/// HTTP client for the monthly archive endpoint.
pub struct ArchiveClient {
    client: Client,
    api_base: String,
}

impl ArchiveClient {
    /// Creates a client with default HTTP settings (no overall timeout).
    pub fn new(api_base: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), api_base)
    }

    pub fn with_http_client(client: Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    pub fn url_for(&self, request: &ArchiveRequest) -> String {
        request.pgn_url(&self.api_base)
    }

    /// Sends one GET for the archive.
    ///
    /// Any HTTP status counts as a completed request here; callers decide
    /// what a non-2xx status means via [`ArchiveResponse::ensure_success`].
    pub async fn fetch(&self, request: &ArchiveRequest) -> Result<ArchiveResponse, FetchError> {
        let url = self.url_for(request);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| classify(&url, &err))?;

        Ok(ArchiveResponse { url, response })
    }
}

/// A response whose headers have arrived. The body is not read until asked for.
#[derive(Debug)]
pub struct ArchiveResponse {
    url: String,
    response: Response,
}

impl ArchiveResponse {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Version and status, e.g. `HTTP/1.1 200 OK`.
    pub fn status_line(&self) -> String {
        format!("{:?} {}", self.response.version(), self.response.status())
    }

    pub fn ensure_success(&self) -> Result<(), FetchError> {
        let status = self.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(FetchError::Status {
                url: self.url.clone(),
                status,
            })
        }
    }

    /// Consumes the response and yields the raw body in chunks.
    pub fn into_body_stream(self) -> impl Stream<Item = Result<Bytes, FetchError>> {
        self.response.bytes_stream().map(|chunk| {
            chunk.map_err(|err| FetchError::Body {
                detail: error_chain(&err),
            })
        })
    }
}

fn classify(url: &str, err: &reqwest::Error) -> FetchError {
    let url = url.to_string();

    if err.is_timeout() {
        return FetchError::Timeout { url };
    }

    let refused = sources(err).any(|source| {
        source
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::ConnectionRefused)
            || source.to_string().to_lowercase().contains("connection refused")
    });
    if refused {
        return FetchError::ConnectionRefused { url };
    }

    let detail = error_chain(err);

    // hyper's connector reports resolver failures as "dns error"
    if sources(err).any(|source| source.to_string().to_lowercase().contains("dns error")) {
        return FetchError::Dns { url, detail };
    }

    if err.is_connect() {
        FetchError::Connect { url, detail }
    } else {
        FetchError::Request { url, detail }
    }
}

fn sources(err: &reqwest::Error) -> impl Iterator<Item = &(dyn std::error::Error + 'static)> {
    std::iter::successors(err.source(), |source| (*source).source())
}

/// Innermost cause of the error, which carries the useful detail.
fn error_chain(err: &reqwest::Error) -> String {
    sources(err)
        .last()
        .map_or_else(|| err.to_string(), ToString::to_string)
}
