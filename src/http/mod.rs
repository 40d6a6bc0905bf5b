//! HTTP protocol layer module
//!
//! Protocol helpers shared by the request handler: content type guessing,
//! cache-disabling headers, request path translation and response builders.

pub mod cache;
pub mod mime;
pub mod path;
pub mod response;

// Re-export commonly used items
pub use cache::disable_caching;
pub use response::{
    build_404_response, build_405_response, build_file_response, build_moved_permanently_response,
    build_pdf_response,
};
