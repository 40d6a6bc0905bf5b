//! Fixed route table
//!
//! Maps a handful of literal request paths to the HTML files that back them.

/// Built-in clean routes: request path -> file under the served root
const FIXED_ROUTES: &[(&str, &str)] = &[
    ("/", "index.html"),
    ("/countdown", "countdown.html"),
    ("/wishes", "wishes.html"),
];

/// Immutable mapping from literal request paths to file names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<(&'static str, &'static str)>,
}

impl RouteTable {
    /// The route table every server instance uses
    pub fn fixed() -> Self {
        Self {
            entries: FIXED_ROUTES.to_vec(),
        }
    }

    /// Exact, case-sensitive lookup of a query-stripped request path
    pub fn lookup(&self, path: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(route, _)| *route == path)
            .map(|(_, file)| *file)
    }

    /// Iterate `(path, file)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::fixed()
    }
}
