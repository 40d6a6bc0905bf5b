//! HTTP cache control module
//!
//! Every response this server produces is marked uncacheable.

use hyper::header::{HeaderMap, HeaderName, HeaderValue, CACHE_CONTROL, EXPIRES, PRAGMA};

/// Headers that stop browsers and proxies from caching or storing a response
pub const NO_CACHE_HEADERS: [(HeaderName, &str); 3] = [
    (CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
    (PRAGMA, "no-cache"),
    (EXPIRES, "0"),
];

/// Apply the cache-disabling headers, replacing any earlier values
///
/// Uses `insert` so each header appears exactly once even if a builder already
/// set one of them.
pub fn disable_caching(headers: &mut HeaderMap) {
    for (name, value) in NO_CACHE_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
}

/// Check that every cache-disabling header is present exactly once
#[cfg(test)]
pub(crate) fn is_uncacheable(headers: &HeaderMap) -> bool {
    NO_CACHE_HEADERS.iter().all(|(name, value)| {
        let mut values = headers.get_all(name).iter();
        values.next().is_some_and(|v| v == *value) && values.next().is_none()
    })
}
