//! Path resolution module
//!
//! Decides, for a single request path, whether to rewrite it to an HTML file,
//! serve it as an inline PDF, or hand it to the default static transport.
//! Resolution is pure: it only consults the route table and an existence probe,
//! so the same path against the same filesystem snapshot always resolves the
//! same way.

mod probe;

pub use probe::FsProbe;

use crate::routing::RouteTable;

/// Outcome of resolving one request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Literal route hit; carries the request path of the mapped file (`/index.html`)
    RouteRewrite(String),
    /// PDF present on disk; carries the root-relative file path (`docs/a.pdf`)
    PdfInline(String),
    /// `.pdf` request with no file behind it
    PdfNotFound,
    /// Clean URL resolved to `<path>.html`; carries the rewritten request path
    HtmlSuffixRewrite(String),
    /// Serve the request path unmodified through the default static transport
    PassThrough,
}

impl Resolution {
    /// Short label used in access logs
    pub const fn label(&self) -> &'static str {
        match self {
            Self::RouteRewrite(_) => "route",
            Self::PdfInline(_) => "pdf",
            Self::PdfNotFound => "pdf-missing",
            Self::HtmlSuffixRewrite(_) => "html-suffix",
            Self::PassThrough => "pass-through",
        }
    }
}

/// Resolve a query-stripped request path.
///
/// `exists` is asked about root-relative paths (leading `/` removed). Decision
/// order, first match wins:
/// 1. literal route
/// 2. final segment has an extension: `.pdf` is served inline, anything else passes through
/// 3. `<path without trailing slashes>.html` exists: rewrite to it
/// 4. pass through
pub fn resolve<F>(path: &str, routes: &RouteTable, exists: F) -> Resolution
where
    F: Fn(&str) -> bool,
{
    if let Some(file) = routes.lookup(path) {
        return Resolution::RouteRewrite(format!("/{file}"));
    }

    if has_extension(path) {
        if path.ends_with(".pdf") {
            let relative = root_relative(path);
            return if exists(relative) {
                Resolution::PdfInline(relative.to_string())
            } else {
                Resolution::PdfNotFound
            };
        }
        return Resolution::PassThrough;
    }

    let candidate = format!("{}.html", path.trim_end_matches('/'));
    if exists(root_relative(&candidate)) {
        return Resolution::HtmlSuffixRewrite(candidate);
    }

    Resolution::PassThrough
}

/// Whether the final path segment contains a dot
fn has_extension(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
}

fn root_relative(path: &str) -> &str {
    path.trim_start_matches('/')
}
