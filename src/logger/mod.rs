//! Logger module
//!
//! Provides logging utilities for the server including:
//! - Startup banner and shutdown messages
//! - Access logging in several formats
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::{AppState, Config};
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Print the startup banner with the served directory and clean routes
pub fn log_server_start(addr: &SocketAddr, state: &AppState) {
    let port = addr.port();
    write_info("======================================");
    write_info("Clean URL server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Serving at:   http://localhost:{port}"));
    write_info(&format!("Directory:    {}", state.root.display()));
    if let Some(workers) = state.config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = state.config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = state.config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("");
    write_info("Available routes:");
    for (route, file) in state.routes.iter() {
        write_info(&format!("  http://localhost:{port}{route:<12} -> {file}"));
    }
    write_info("");
    write_info("Clean URLs enabled: .html extensions are optional");
    write_info("Press Ctrl+C to stop the server");
    write_info("======================================\n");
}

/// Farewell printed after an interrupt or terminate signal
pub fn log_server_stopped(signal: &str) {
    write_info(&format!("\n[Shutdown] {signal} received. Server stopped. Thanks for visiting!"));
}

/// Operator guidance when the port is taken
pub fn log_port_in_use(port: u16) {
    write_error(&format!("[ERROR] Port {port} is already in use. Try a different port:"));
    write_error(&format!(
        "        clean-url-server --port {}",
        port.checked_add(1).unwrap_or(8001)
    ));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}
