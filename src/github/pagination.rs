//! Lazy pagination over list endpoints.
//!
//! GitHub list responses come back a page at a time, with the next page
//! advertised through the `Link` response header. [`PaginatedList`] presents
//! those pages as one ordered collection while fetching them only as they are
//! actually needed; constructing one performs no I/O. Continuation is decided
//! by the presence of a next link, never by page length, so a short page with
//! a next link keeps the cursor alive.

use futures::stream::{self, BoxStream, Stream, StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use crate::github::error::{GitHubError, GitHubResult};
use crate::github::transport::{FetchedPage, Transport};

/// A lazily-fetched, ordered view over every page of a list endpoint.
///
/// Fetched items accumulate in an append-only buffer owned exclusively by
/// this value; positional access via [`get`](Self::get) pulls pages until the
/// requested index is buffered. [`stream`](Self::stream) is independent of
/// the buffer and restarts from page one each time it is called.
pub struct PaginatedList<T> {
    transport: Arc<dyn Transport>,
    first_url: String,
    items: Vec<T>,
    /// URL of the next unfetched page; `None` once every page is buffered.
    cursor: Option<String>,
}

impl<T> PaginatedList<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Wrap the list endpoint at `first_url`. No request is made until an
    /// accessor needs a page.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, first_url: impl Into<String>) -> Self {
        let first_url = first_url.into();
        Self {
            transport,
            cursor: Some(first_url.clone()),
            first_url,
            items: Vec::new(),
        }
    }

    /// Item at position `i` in server order, fetching pages on demand.
    ///
    /// Fails with [`GitHubError::IndexOutOfRange`] when `i` is past the end
    /// of the last page; transport failures surface here unchanged.
    pub async fn get(&mut self, index: usize) -> GitHubResult<&T> {
        while self.items.len() <= index {
            if !self.fetch_next_page().await? {
                break;
            }
        }
        if index < self.items.len() {
            Ok(&self.items[index])
        } else {
            Err(GitHubError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    /// Total number of items, fetching every remaining page to find out.
    pub async fn total_count(&mut self) -> GitHubResult<usize> {
        while self.fetch_next_page().await? {}
        Ok(self.items.len())
    }

    /// Number of items buffered so far without any further fetching.
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        self.items.len()
    }

    /// Whether every page has been fetched into the buffer.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_none()
    }

    /// A fresh lazy stream over the whole collection, starting again from
    /// page one. Streams share no cursor state with the buffer or with each
    /// other, so independent iterations cannot interfere.
    #[must_use]
    pub fn stream(&self) -> PageStream<T> {
        PageStream::new(self.transport.clone(), self.first_url.clone())
    }

    /// Fetch one more page into the buffer. `Ok(false)` means the collection
    /// was already exhausted. The cursor only advances on success, so a
    /// failed fetch can be retried by the caller.
    async fn fetch_next_page(&mut self) -> GitHubResult<bool> {
        let Some(url) = self.cursor.clone() else {
            return Ok(false);
        };
        let FetchedPage { body, next } = self.transport.fetch(&url).await?;
        let page: Vec<T> = serde_json::from_value(body)
            .map_err(|e| GitHubError::deserialize("resource page", e))?;
        log::debug!("buffered page of {} items from {url}", page.len());
        self.items.extend(page);
        self.cursor = next;
        Ok(true)
    }
}

/// Lazy stream of resources produced by [`PaginatedList::stream`].
///
/// Each next page is requested only once the current page is drained; the
/// stream ends at the first page without a next link. A transport or decode
/// failure is yielded as the final item.
pub struct PageStream<T> {
    inner: BoxStream<'static, GitHubResult<T>>,
}

impl<T> PageStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    fn new(transport: Arc<dyn Transport>, first_url: String) -> Self {
        let inner = stream::try_unfold(
            (transport, Some(first_url)),
            |(transport, url)| async move {
                let Some(url) = url else {
                    return Ok::<_, GitHubError>(None);
                };
                let FetchedPage { body, next } = transport.fetch(&url).await?;
                let page: Vec<T> = serde_json::from_value(body)
                    .map_err(|e| GitHubError::deserialize("resource page", e))?;
                log::debug!("streaming page of {} items from {url}", page.len());
                let page = stream::iter(page.into_iter().map(Ok::<T, GitHubError>));
                Ok(Some((page, (transport, next))))
            },
        )
        .try_flatten()
        .boxed();
        Self { inner }
    }
}

impl<T> Stream for PageStream<T> {
    type Item = GitHubResult<T>;

    #[inline]
    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
