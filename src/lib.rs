//! Clean URL static file server
//!
//! Serves a directory over HTTP so that pages are reachable without their
//! `.html` suffix, a few literal routes map to fixed pages, and PDFs open
//! inline in the browser. Nothing is ever cacheable.
//!
//! Request flow:
//!
//! ```text
//! accept ─▶ handler::router ─▶ resolver::resolve ─┬─ RouteRewrite / HtmlSuffixRewrite / PassThrough ─▶ static_files::serve_path
//!                                                 ├─ PdfInline ─▶ static_files::serve_pdf
//!                                                 └─ PdfNotFound ─▶ 404
//!          every response ─▶ http::cache::disable_caching ─▶ client
//! ```

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod resolver;
pub mod routing;
pub mod server;

#[cfg(test)]
pub(crate) mod test_support;
