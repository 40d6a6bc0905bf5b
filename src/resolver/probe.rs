//! Filesystem existence probe for the resolver

use crate::http::path::translate_path;
use std::path::{Path, PathBuf};

/// Answers "is there a regular file at this root-relative path?"
///
/// Paths go through the same translation as the static transport, so a
/// positive answer means the transport can find the same file.
#[derive(Debug, Clone)]
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn exists(&self, relative: &str) -> bool {
        translate_path(&self.root, relative).is_some_and(|path| path.is_file())
    }
}
