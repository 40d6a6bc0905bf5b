//! MIME type detection module
//!
//! Returns the Content-Type for a file based on its extension.

use mime_guess::mime;
use std::path::Path;

/// Content type sent for PDFs served through the inline branch
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Guess the `Content-Type` for a file path
///
/// Unknown or missing extensions fall back to `application/octet-stream`.
/// Textual types carry a UTF-8 charset.
///
/// # Examples
/// ```
/// use clean_url_server::http::mime::content_type_for;
/// assert_eq!(content_type_for("index.html"), "text/html; charset=utf-8");
/// assert_eq!(content_type_for("photo.png"), "image/png");
/// assert_eq!(content_type_for("LICENSE"), "application/octet-stream");
/// ```
pub fn content_type_for(path: impl AsRef<Path>) -> String {
    let guessed = mime_guess::from_path(path).first_or_octet_stream();

    if is_textual(&guessed) && guessed.get_param(mime::CHARSET).is_none() {
        format!("{}; charset=utf-8", guessed.essence_str())
    } else {
        guessed.to_string()
    }
}

fn is_textual(m: &mime::Mime) -> bool {
    m.type_() == mime::TEXT
        || (m.type_() == mime::APPLICATION
            && matches!(m.subtype().as_str(), "javascript" | "json" | "xml"))
}
