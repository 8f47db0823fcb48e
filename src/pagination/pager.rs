//! Generic offset pager
//!
//! One pager implementation serves every paged list endpoint. A resource
//! plugs in by giving its options type a [`PageOptions`] impl and the
//! service client a [`PageFetcher`] impl.

use async_trait::async_trait;

use super::cursor;
use crate::error::{Error, Result};

/// Request options that carry an offset cursor
pub trait PageOptions: Clone {
    /// Current value of the offset parameter, if set
    fn offset(&self) -> Option<u64>;

    /// Set or clear the offset parameter
    fn set_offset(&mut self, offset: Option<u64>);
}

/// One page of results as the pager sees it
///
/// The pager depends only on this shape, never on a concrete resource
/// response type.
#[derive(Debug, Clone, Default)]
pub struct Page<T> {
    /// The items returned for this page
    pub items: Vec<T>,
    /// The `next` link href, if the response carried one
    pub next_href: Option<String>,
}

impl<T> Page<T> {
    /// Create a page with a next link
    pub fn new(items: Vec<T>, next_href: Option<String>) -> Self {
        Self { items, next_href }
    }

    /// Create a terminal page (no next link)
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_href: None,
        }
    }
}

/// The underlying list operation a [`Pager`] drives
///
/// Implemented by the service client once per paged resource.
#[async_trait]
pub trait PageFetcher<O, T>: Send + Sync
where
    O: PageOptions + Send + Sync,
    T: Send,
{
    /// Issue the list call with the given options and return one page
    async fn fetch_page(&self, options: &O) -> Result<Page<T>>;
}

/// Offset-based pager over a list endpoint
///
/// Constructed once per logical listing operation via the service client's
/// `*_pager` methods. The pager owns its copy of the request options, so
/// advancing the cursor never touches anything the caller holds.
///
/// Each call to [`get_next`](Pager::get_next) mutates the stored cursor,
/// which is why it takes `&mut self`; driving one pager from two tasks
/// requires external synchronization, which the borrow checker enforces.
/// Cancellation is cooperative: drop the returned future, or bound the
/// underlying call with a request timeout.
///
/// The pager performs no retries of its own. A failed fetch leaves the
/// cursor untouched, so the caller may retry the same logical page (or a
/// whole [`get_all`](Pager::get_all), which resumes rather than restarts).
pub struct Pager<'a, O, T>
where
    O: PageOptions + Send + Sync,
    T: Send,
{
    fetcher: &'a dyn PageFetcher<O, T>,
    options: O,
    next: Option<u64>,
    has_next: bool,
}

impl<'a, O, T> Pager<'a, O, T>
where
    O: PageOptions + Send + Sync,
    T: Send,
{
    /// Create a new pager over the given options.
    ///
    /// The pager owns cursor advancement, so options arriving with a
    /// non-zero offset already set are a usage error.
    pub fn new(fetcher: &'a dyn PageFetcher<O, T>, options: O) -> Result<Self> {
        if options.offset().is_some_and(|offset| offset != 0) {
            return Err(Error::usage("the options 'offset' field should not be set"));
        }

        Ok(Self {
            fetcher,
            options,
            next: None,
            has_next: true,
        })
    }

    /// Returns true if there are potentially more results to be retrieved
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Fetch the next page of results.
    ///
    /// Fails with a usage error, without issuing a request, once the pager
    /// is exhausted. A transport or next-link parse error is propagated
    /// verbatim and leaves the cursor state unchanged.
    pub async fn get_next(&mut self) -> Result<Vec<T>> {
        if !self.has_next() {
            return Err(Error::usage("no more results available"));
        }

        // None on the first call: start from the beginning.
        self.options.set_offset(self.next);

        let page = self.fetcher.fetch_page(&self.options).await?;

        let next = match page.next_href.as_deref() {
            Some(href) => cursor::next_offset(href)?,
            None => None,
        };

        self.next = next;
        self.has_next = self.next.is_some();

        Ok(page.items)
    }

    /// Fetch all remaining results by calling [`get_next`](Pager::get_next)
    /// until the pager is exhausted, concatenating pages in order.
    ///
    /// Aborts on the first error, discarding items accumulated within this
    /// call; the cursor stays where the error occurred, so a subsequent
    /// `get_all` resumes from there.
    pub async fn get_all(&mut self) -> Result<Vec<T>> {
        let mut all_items = Vec::new();

        while self.has_next() {
            let page = self.get_next().await?;
            all_items.extend(page);
        }

        Ok(all_items)
    }
}

impl<O, T> std::fmt::Debug for Pager<'_, O, T>
where
    O: PageOptions + Send + Sync,
    T: Send,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("next", &self.next)
            .field("has_next", &self.has_next)
            .finish_non_exhaustive()
    }
}
