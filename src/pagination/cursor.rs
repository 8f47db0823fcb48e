//! Cursor extraction from next-link URLs

use crate::error::{Error, Result};
use url::Url;

/// Extract the pagination cursor from a next-link URL.
///
/// The cursor is the `offset` query parameter parsed as a base-10 unsigned
/// integer. A link without an `offset` parameter yields `None` (no further
/// pages). A value that does not parse as an integer is an error naming the
/// offending URL.
///
/// Servers may return the link either absolute or relative to the API root;
/// both forms are accepted.
pub fn next_offset(href: &str) -> Result<Option<u64>> {
    let url = parse_href(href)?;

    let raw = url
        .query_pairs()
        .find_map(|(key, value)| (key == "offset").then(|| value.into_owned()));

    match raw {
        None => Ok(None),
        Some(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|e| Error::next_link(href, e.to_string())),
    }
}

fn parse_href(href: &str) -> Result<Url> {
    match Url::parse(href) {
        Ok(url) => Ok(url),
        // Relative links are resolved against a placeholder origin; only the
        // query string matters here.
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse("https://relative.invalid/")
                .expect("placeholder base URL is valid");
            base.join(href)
                .map_err(|e| Error::next_link(href, e.to_string()))
        }
        Err(e) => Err(Error::next_link(href, e.to_string())),
    }
}
