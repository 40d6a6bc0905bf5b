// Application state module
// Immutable per-process state shared by every connection

use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::StartupError;
use crate::resolver::FsProbe;
use crate::routing::RouteTable;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Canonical served root, fixed at startup
    pub root: PathBuf,
    pub routes: RouteTable,
    pub probe: FsProbe,
}

impl AppState {
    /// Resolve the served root and build the state around it
    ///
    /// The root is canonicalised here once; nothing later depends on the
    /// process working directory.
    pub fn new(config: Config) -> Result<Self, StartupError> {
        let root = resolve_root(Path::new(&config.server.root))?;
        Ok(Self {
            probe: FsProbe::new(root.clone()),
            routes: RouteTable::fixed(),
            root,
            config,
        })
    }

    pub const fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }
}

fn resolve_root(path: &Path) -> Result<PathBuf, StartupError> {
    let root = path
        .canonicalize()
        .map_err(|source| StartupError::RootDirectory {
            path: path.to_path_buf(),
            source,
        })?;

    if !root.is_dir() {
        return Err(StartupError::RootDirectory {
            path: path.to_path_buf(),
            source: std::io::Error::other("not a directory"),
        });
    }

    Ok(root)
}
