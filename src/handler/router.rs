//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method check, path resolution,
//! dispatch to the PDF reader or the static transport, then cache-disabling
//! headers and the access log.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::resolver::{self, Resolution};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderMap, HeaderName, CONTENT_LENGTH, REFERER, USER_AGENT};
use hyper::{Method, Request, Response, Uri};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Outcome label for requests rejected before resolution
const METHOD_NOT_ALLOWED: &str = "method-not-allowed";

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    // GET/HEAD bodies are never read
    let (parts, _body) = req.into_parts();
    let (response, outcome) = respond(&state, &parts.method, &parts.uri).await;

    if state.access_log_enabled() {
        let mut entry = AccessLogEntry::new(
            remote_addr.ip().to_string(),
            parts.method.to_string(),
            parts.uri.path().to_string(),
        );
        entry.query = parts.uri.query().map(ToString::to_string);
        entry.http_version = version_label(parts.version).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = body_length(&response);
        entry.referer = header_string(&parts.headers, REFERER);
        entry.user_agent = header_string(&parts.headers, USER_AGENT);
        entry.outcome = outcome;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Produce the response for one request, plus the outcome label for logging
///
/// Cache-disabling headers are applied here, after every branch, so nothing
/// can skip them.
pub async fn respond(
    state: &AppState,
    method: &Method,
    uri: &Uri,
) -> (Response<Full<Bytes>>, &'static str) {
    let (mut response, outcome) = match *method {
        Method::GET | Method::HEAD => {
            let is_head = *method == Method::HEAD;
            let path = uri.path();
            let resolution = resolver::resolve(path, &state.routes, |p| state.probe.exists(p));
            let response = dispatch(&state.root, &resolution, path, uri.query(), is_head).await;
            (response, resolution.label())
        }
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            (http::build_405_response(), METHOD_NOT_ALLOWED)
        }
    };

    http::disable_caching(response.headers_mut());
    (response, outcome)
}

/// Turn a resolution into a response
async fn dispatch(
    root: &Path,
    resolution: &Resolution,
    path: &str,
    query: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match resolution {
        Resolution::RouteRewrite(target) | Resolution::HtmlSuffixRewrite(target) => {
            static_files::serve_path(root, target, query, is_head).await
        }
        Resolution::PdfInline(relative) => static_files::serve_pdf(root, relative, is_head).await,
        Resolution::PdfNotFound => http::build_404_response(is_head),
        Resolution::PassThrough => static_files::serve_path(root, path, query, is_head).await,
    }
}

fn version_label(version: hyper::Version) -> &'static str {
    match version {
        hyper::Version::HTTP_09 => "0.9",
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        hyper::Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

fn header_string(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn body_length(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}
