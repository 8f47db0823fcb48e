//! Pagination module
//!
//! Offset-based pagination over list endpoints that return a `next` link.
//!
//! # Overview
//!
//! Warden list endpoints page their results and embed a `next` link in each
//! response whose `offset` query parameter is the cursor for the following
//! page. [`Pager`] hides the cursor mechanics behind a small contract:
//! does more data exist ([`Pager::has_next`]), fetch the next batch
//! ([`Pager::get_next`]), fetch everything ([`Pager::get_all`]).
//!
//! The pager is generic over the request options and item type, so one
//! implementation serves every paged resource in the SDK.

mod cursor;
mod pager;

pub use cursor::next_offset;
pub use pager::{Page, PageFetcher, PageOptions, Pager};
