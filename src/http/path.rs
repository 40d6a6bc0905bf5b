//! Request path translation
//!
//! Turns a URL path into a filesystem path under the served root.

use std::path::{Path, PathBuf};

/// Map a request path onto `root`.
///
/// The path is percent-decoded and normalised segment by segment: empty and `.`
/// segments are dropped, `..` pops the previous segment but never climbs above
/// the root. Query strings and fragments are ignored.
///
/// Returns `None` when the path cannot name a file under the root: escapes
/// that decode to invalid UTF-8, or a segment holding a backslash or NUL.
pub fn translate_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let path = request_path
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let decoded = urlencoding::decode(path).ok()?;

    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s if s.contains(['\\', '\0']) => return None,
            s => segments.push(s),
        }
    }

    Some(
        segments
            .into_iter()
            .fold(root.to_path_buf(), |acc, segment| acc.join(segment)),
    )
}
