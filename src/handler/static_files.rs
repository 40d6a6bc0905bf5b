//! Static file serving module
//!
//! The default transport behind the resolver: maps a request path onto the
//! served root, handles directories and index files, and reads files whole.
//! Also reads PDFs for the inline branch.

use crate::error::ServeError;
use crate::http::{self, mime, path::translate_path};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Files tried, in order, when a directory is requested
const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Serve `request_path` from `root` the way a plain static file server would
///
/// Directories without a trailing slash are redirected to the slashed URL;
/// with the slash they serve their index file or 404. There is no directory
/// listing.
pub async fn serve_path(
    root: &Path,
    request_path: &str,
    query: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let Some(mut target) = translate_path(root, request_path) else {
        return http::build_404_response(is_head);
    };

    if fs::metadata(&target).await.is_ok_and(|m| m.is_dir()) {
        if !request_path.ends_with('/') {
            let location = match query {
                Some(q) => format!("{request_path}/?{q}"),
                None => format!("{request_path}/"),
            };
            return http::build_moved_permanently_response(&location);
        }
        match find_index_file(&target).await {
            Some(index) => target = index,
            None => return http::build_404_response(is_head),
        }
    }

    match load_file(root, &target).await {
        Ok(content) => {
            let content_type = mime::content_type_for(&target);
            http::build_file_response(content, &content_type, is_head)
        }
        Err(e) => not_found(&e, is_head),
    }
}

/// Serve a PDF inline; any failure to read it is a 404
pub async fn serve_pdf(root: &Path, relative: &str, is_head: bool) -> Response<Full<Bytes>> {
    let Some(target) = translate_path(root, relative) else {
        return http::build_404_response(is_head);
    };
    match load_file(root, &target).await {
        Ok(content) => http::build_pdf_response(content, is_head),
        Err(e) => not_found(&e, is_head),
    }
}

async fn find_index_file(dir: &Path) -> Option<PathBuf> {
    for name in INDEX_FILES {
        let candidate = dir.join(name);
        if fs::metadata(&candidate).await.is_ok_and(|m| m.is_file()) {
            return Some(candidate);
        }
    }
    None
}

/// Read a regular file that lives under `root` (which must be canonical)
///
/// The file is read in one call; its handle is closed before this returns on
/// every path, including errors.
pub async fn load_file(root: &Path, file_path: &Path) -> Result<Bytes, ServeError> {
    let canonical = fs::canonicalize(file_path)
        .await
        .map_err(|e| ServeError::io(file_path.to_path_buf(), e))?;

    if !canonical.starts_with(root) {
        return Err(ServeError::OutsideRoot(canonical));
    }

    let metadata = fs::metadata(&canonical)
        .await
        .map_err(|e| ServeError::io(canonical.clone(), e))?;
    if !metadata.is_file() {
        return Err(ServeError::NotFound(canonical));
    }

    fs::read(&canonical)
        .await
        .map(Bytes::from)
        .map_err(|e| ServeError::io(canonical, e))
}

fn not_found(err: &ServeError, is_head: bool) -> Response<Full<Bytes>> {
    if err.is_unexpected() {
        logger::log_warning(&err.to_string());
    }
    http::build_404_response(is_head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScratchDir;
    use http_body_util::BodyExt;

    async fn body_of(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    fn canonical_root(dir: &ScratchDir) -> PathBuf {
        dir.path().canonicalize().unwrap()
    }

    #[tokio::test]
    async fn test_serves_file_with_guessed_type() {
        let dir = ScratchDir::new("static-file");
        dir.write("style.css", b"h1 { color: red }");
        let root = canonical_root(&dir);

        let resp = serve_path(&root, "/style.css", None, false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/css; charset=utf-8");
        assert_eq!(body_of(resp).await, Bytes::from("h1 { color: red }"));
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let dir = ScratchDir::new("static-missing");
        let root = canonical_root(&dir);
        let resp = serve_path(&root, "/nope.css", None, false).await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_directory_redirects_to_slash() {
        let dir = ScratchDir::new("static-dir-redirect");
        dir.write("blog/index.html", b"<h1>blog</h1>");
        let root = canonical_root(&dir);

        let resp = serve_path(&root, "/blog", None, false).await;
        assert_eq!(resp.status(), 301);
        assert_eq!(resp.headers()["Location"], "/blog/");

        let resp = serve_path(&root, "/blog", Some("page=2"), false).await;
        assert_eq!(resp.headers()["Location"], "/blog/?page=2");
    }

    #[tokio::test]
    async fn test_directory_index_files() {
        let dir = ScratchDir::new("static-dir-index");
        dir.write("blog/index.htm", b"htm");
        dir.write("docs/index.html", b"html");
        dir.write("docs/index.htm", b"htm");
        dir.mkdir("empty");
        let root = canonical_root(&dir);

        let resp = serve_path(&root, "/blog/", None, false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_of(resp).await, Bytes::from("htm"));

        let resp = serve_path(&root, "/docs/", None, false).await;
        assert_eq!(body_of(resp).await, Bytes::from("html"));

        let resp = serve_path(&root, "/empty/", None, false).await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_traversal_stays_in_root() {
        let outer = ScratchDir::new("static-traversal");
        outer.write("secret.txt", b"secret");
        outer.write("site/index.html", b"home");
        let root = outer.path().join("site").canonicalize().unwrap();

        let resp = serve_path(&root, "/../secret.txt", None, false).await;
        assert_eq!(resp.status(), 404);
        let resp = serve_path(&root, "/%2e%2e/secret.txt", None, false).await;
        assert_eq!(resp.status(), 404);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_outside_root_is_refused() {
        let outer = ScratchDir::new("static-symlink");
        let secret = outer.write("secret.txt", b"secret");
        outer.mkdir("site");
        std::os::unix::fs::symlink(&secret, outer.path().join("site/leak.txt")).unwrap();
        let root = outer.path().join("site").canonicalize().unwrap();

        let err = load_file(&root, &root.join("leak.txt")).await.unwrap_err();
        assert!(matches!(err, ServeError::OutsideRoot(_)));
    }

    #[tokio::test]
    async fn test_pdf_inline_and_missing() {
        let dir = ScratchDir::new("static-pdf");
        const PDF: &[u8] = b"%PDF-1.4\n\x00\xff binary";
        dir.write("brochure.pdf", PDF);
        let root = canonical_root(&dir);

        let resp = serve_pdf(&root, "brochure.pdf", false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/pdf");
        assert_eq!(resp.headers()["Content-Disposition"], "inline");
        assert_eq!(body_of(resp).await, Bytes::from_static(PDF));

        let resp = serve_pdf(&root, "gone.pdf", false).await;
        assert_eq!(resp.status(), 404);
        assert!(resp.headers().get("Content-Disposition").is_none());
    }

    #[tokio::test]
    async fn test_untranslatable_paths_are_404_not_root() {
        let dir = ScratchDir::new("static-reject");
        dir.write("index.html", b"home");
        let root = canonical_root(&dir);

        for path in ["/missing%5Cpage.css", "/no%5Cpage/", "/x%00.js", "/%FF"] {
            let resp = serve_path(&root, path, None, false).await;
            assert_eq!(resp.status(), 404, "{path}");
        }
        assert_eq!(serve_pdf(&root, "a%00.pdf", false).await.status(), 404);
    }

    #[tokio::test]
    async fn test_head_has_no_body() {
        let dir = ScratchDir::new("static-head");
        dir.write("a.txt", b"abc");
        let root = canonical_root(&dir);

        let resp = serve_path(&root, "/a.txt", None, true).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "3");
        assert!(body_of(resp).await.is_empty());
    }
}
