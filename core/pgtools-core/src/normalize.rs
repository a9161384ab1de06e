//! Walking source trees and normalizing copyright headers

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::comment::{format_notice_lines, CommentStyle};
use crate::discovery::{FileDiscovery, PathDiscovery};
use crate::header::{is_compliant, rewrite_header};
use crate::notice::{Notice, NoticeSource};
use crate::patterns::{FileFilter, PatternSet};

/// Source directories scanned for headers, relative to the project root.
pub const SOURCE_DIRS: &[&str] = &["source", "Tools"];

/// Files that carry a copyright header.
pub const SOURCE_FILE_PATTERNS: &[&str] = &[r".*\.h", r".*\.cpp", r".*\.cs", r".*\.py"];

#[derive(Debug, Clone)]
pub struct CopyrightConfig {
    pub notice: NoticeSource,
    pub source_dirs: Vec<PathBuf>,
    pub filter: FileFilter,
    pub comments: CommentStyle,
}

impl CopyrightConfig {
    /// Fixed configuration for the project's C++, C# and Python sources.
    pub fn project_sources() -> Result<Self> {
        Ok(Self {
            notice: NoticeSource::default(),
            source_dirs: SOURCE_DIRS.iter().map(PathBuf::from).collect(),
            filter: FileFilter::including(PatternSet::new(SOURCE_FILE_PATTERNS)?),
            comments: CommentStyle::default(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NormalizeMode {
    /// Rewrite every file whose header does not match.
    #[default]
    Fix,
    /// Only report files whose header does not match.
    Check,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub scanned: usize,
    pub non_compliant: usize,
    pub updated: usize,
}

/// Bring every selected file under `root` in line with `notice`.
///
/// In [`NormalizeMode::Fix`] each rewritten file is reported to `progress` as
/// `Updating <path>`; in [`NormalizeMode::Check`] each offending file is
/// reported as `Missing notice: <path>` and nothing is written.
pub fn normalize_tree(
    root: &Path,
    config: &CopyrightConfig,
    notice: &Notice,
    mode: NormalizeMode,
    mut progress: impl Write,
) -> Result<NormalizeSummary> {
    let dirs: Vec<PathBuf> = config.source_dirs.iter().map(|d| root.join(d)).collect();
    let files = PathDiscovery::new(dirs, config.filter.clone()).discover()?;

    let mut summary = NormalizeSummary::default();

    for file in files {
        summary.scanned += 1;
        let name = file
            .path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let prefix = config.comments.prefix_for(&name);
        let notice_lines = format_notice_lines(notice, prefix);

        if is_compliant(&file.path, &notice_lines)? {
            debug!(file = %file.path.display(), "notice already present");
            continue;
        }
        summary.non_compliant += 1;

        match mode {
            NormalizeMode::Fix => {
                writeln!(progress, "Updating {}", file.path.display())?;
                rewrite_header(&file.path, &notice_lines, prefix)?;
                summary.updated += 1;
            }
            NormalizeMode::Check => {
                writeln!(progress, "Missing notice: {}", file.path.display())?;
            }
        }
    }

    Ok(summary)
}
