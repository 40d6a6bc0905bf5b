//! Error types for startup and file serving.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop the server before it starts accepting connections.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Configuration sources could not be read or deserialised.
    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Host/port pair does not form a socket address.
    #[error("invalid listen address: {0}")]
    InvalidAddress(String),

    /// Served root is missing or not a directory.
    #[error("cannot serve directory {}: {source}", .path.display())]
    RootDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Another process already holds the port.
    #[error("port {port} is already in use")]
    AddrInUse { port: u16 },

    /// Any other bind/listen failure.
    #[error("failed to bind listener: {0}")]
    Bind(#[source] io::Error),

    /// Tokio runtime could not be built.
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] io::Error),

    /// Shutdown signal handlers could not be installed.
    #[error("failed to install signal handlers: {0}")]
    Signal(#[source] io::Error),

    /// Log files could not be opened.
    #[error("failed to initialise logging: {0}")]
    Logger(#[source] io::Error),
}

impl StartupError {
    /// Classify a bind error, singling out "address in use"
    pub fn from_bind(port: u16, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::AddrInUse {
            Self::AddrInUse { port }
        } else {
            Self::Bind(err)
        }
    }
}

/// Per-request failures inside the static transport. Every variant maps to 404.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("path escapes served root: {}", .0.display())]
    OutsideRoot(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ServeError {
    /// Wrap an I/O error, treating a missing file as `NotFound`
    pub fn io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Io { path, source }
        }
    }

    /// Whether this failure is worth an error-log line
    pub const fn is_unexpected(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::OutsideRoot(_))
    }
}
