//! HTTP transport seam for GitHub REST operations.
//!
//! Operations and pagination consume the [`Transport`] trait rather than a
//! concrete HTTP client, so tests can drive them from canned payloads. The
//! production implementation is [`HttpTransport`] on top of reqwest.

use futures::future::BoxFuture;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, LINK};
use reqwest::Method;
use serde_json::Value;

use crate::github::error::{GitHubError, GitHubResult};

/// REST API version pinned on every request.
const API_VERSION: &str = "2022-11-28";

/// One page of JSON as returned by a GET, plus the follow-up link if the
/// server advertised one in its `Link` header.
#[derive(Debug)]
pub struct FetchedPage {
    /// Parsed response body.
    pub body: Value,
    /// Absolute URL of the next page, when more pages exist.
    pub next: Option<String>,
}

/// Minimal surface the alert operations need from an HTTP engine.
///
/// The `next` link carried by [`FetchedPage`] is authoritative for pagination:
/// a page is the last one exactly when `next` is `None`, regardless of how
/// many items it holds.
pub trait Transport: Send + Sync {
    /// GET `url` and return the parsed body plus pagination metadata.
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, GitHubResult<FetchedPage>>;

    /// Perform a write request with an optional JSON body.
    fn send<'a>(
        &'a self,
        method: Method,
        url: &'a str,
        body: Option<Value>,
    ) -> BoxFuture<'a, GitHubResult<Value>>;
}

/// reqwest-backed [`Transport`] speaking the GitHub REST dialect.
pub struct HttpTransport {
    client: reqwest::Client,
    token: Option<String>,
}

impl HttpTransport {
    /// Build a transport, optionally authenticating with a personal access token.
    pub fn new(token: Option<String>, user_agent: &str) -> GitHubResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;
        Ok(Self { client, token })
    }

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION);
        if let Some(token) = &self.token {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        req
    }

    /// Map non-success statuses onto the error variants callers match on.
    async fn check_status(response: reqwest::Response) -> GitHubResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status_error(status.as_u16(), response.headers(), response.url().as_str()) {
            Some(err) => Err(err),
            None => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| status.to_string());
                Err(GitHubError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

impl Transport for HttpTransport {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, GitHubResult<FetchedPage>> {
        Box::pin(async move {
            log::debug!("GET {url}");
            let response = self.request(Method::GET, url).send().await?;
            let response = Self::check_status(response).await?;
            let next = next_link(response.headers());
            let body: Value = response.json().await?;
            Ok(FetchedPage { body, next })
        })
    }

    fn send<'a>(
        &'a self,
        method: Method,
        url: &'a str,
        body: Option<Value>,
    ) -> BoxFuture<'a, GitHubResult<Value>> {
        Box::pin(async move {
            log::debug!("{method} {url}");
            let mut req = self.request(method, url);
            if let Some(body) = body {
                req = req.json(&body);
            }
            let response = Self::check_status(req.send().await?).await?;
            Ok(response.json().await?)
        })
    }
}

/// Classify a non-success status. `None` means the generic `Api` variant,
/// whose message the caller fills in from the response body.
fn status_error(status: u16, headers: &HeaderMap, url: &str) -> Option<GitHubError> {
    match status {
        401 => Some(GitHubError::AuthRequired),
        403 if rate_limit_exhausted(headers) => Some(GitHubError::RateLimitExceeded),
        404 => Some(GitHubError::NotFound(url.to_string())),
        _ => None,
    }
}

fn rate_limit_exhausted(headers: &HeaderMap) -> bool {
    headers
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        == Some("0")
}

/// Extract the `rel="next"` target from a `Link` response header.
fn next_link(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(LINK)?.to_str().ok()?;
    for part in raw.split(',') {
        let mut pieces = part.trim().split(';');
        let Some(target) = pieces.next() else {
            continue;
        };
        if pieces.any(|p| p.trim() == r#"rel="next""#) {
            let target = target.trim().trim_start_matches('<').trim_end_matches('>');
            return Some(target.to_string());
        }
    }
    None
}
