//! Request handler module
//!
//! Wires path resolution into responses: the router picks a branch, the static
//! file module reads from the served root.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::{handle_request, respond};
