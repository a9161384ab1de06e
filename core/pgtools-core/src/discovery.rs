//! Recursive file discovery over a set of roots

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;

use crate::patterns::FileFilter;

/// Path to a file selected by a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFileRef {
    pub path: PathBuf,
}

/// Trait for enumerating files from some backing store.
pub trait FileDiscovery {
    fn discover(&self) -> Result<Vec<SourceFileRef>>;
}

/// Recursive filesystem walker that keeps files whose base name passes a filter.
///
/// Files come back in the order the filesystem enumerates them, which is not
/// sorted. Roots that do not exist are skipped.
#[derive(Debug, Clone)]
pub struct PathDiscovery {
    roots: Vec<PathBuf>,
    filter: FileFilter,
}

impl PathDiscovery {
    pub fn new<I, P>(roots: I, filter: FileFilter) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let roots = roots.into_iter().map(Into::into).collect();
        Self { roots, filter }
    }
}

impl FileDiscovery for PathDiscovery {
    fn discover(&self) -> Result<Vec<SourceFileRef>> {
        let mut found = Vec::new();

        for root in &self.roots {
            if !root.exists() {
                debug!(root = %root.display(), "skipping missing root");
                continue;
            }

            for entry in WalkDir::new(root) {
                let entry = entry.with_context(|| format!("walking {}", root.display()))?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let name = entry.file_name().to_string_lossy();
                if self.filter.accepts(&name) {
                    found.push(SourceFileRef {
                        path: entry.path().to_path_buf(),
                    });
                }
            }
        }

        Ok(found)
    }
}
