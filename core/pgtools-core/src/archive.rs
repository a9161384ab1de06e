//! Packaging of editor binaries into a deflate-compressed zip archive

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::{debug, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::discovery::{FileDiscovery, PathDiscovery};
use crate::patterns::{FileFilter, PatternSet};

/// Directories holding editor binaries, relative to the project root.
pub const EDITOR_BINARY_ROOTS: &[&str] = &["Binaries", "Plugins/MultiplayerSessions/Binaries"];

/// Editor binaries and manifests shipped alongside the editor.
pub const EDITOR_BINARY_PATTERNS: &[&str] = &[
    r"UnrealEditor-PG\w+\.dll",
    r"UnrealEditor-PaperGolf\w*\.dll",
    r"UnrealEditor\.modules",
    r"PaperGolfEditor\.target",
    "UnrealEditor-MultiplayerSessions.dll",
];

/// What to pack and where entry names are measured from.
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// Entry names are paths relative to this directory. Roots are resolved against it too.
    pub base_dir: PathBuf,
    pub roots: Vec<PathBuf>,
    pub filter: FileFilter,
}

impl ArchiveConfig {
    /// Fixed configuration for packaging the editor binaries of the current project.
    pub fn editor_binaries() -> Result<Self> {
        Ok(Self {
            base_dir: PathBuf::from("."),
            roots: EDITOR_BINARY_ROOTS.iter().map(PathBuf::from).collect(),
            filter: FileFilter::including(PatternSet::new(EDITOR_BINARY_PATTERNS)?),
        })
    }

    /// Same patterns and roots, measured from another directory.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }
}

/// A file on disk and the name it is stored under in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// Entries stored in the archive.
    pub entries: usize,
    /// Files dropped because a later file mapped to the same entry name.
    pub replaced: usize,
}

/// Walk the configured roots and map every selected file to its entry name.
///
/// When two files map to the same name the later one takes the earlier one's
/// slot, so each name appears once.
pub fn collect_entries(config: &ArchiveConfig) -> Result<(Vec<ArchiveEntry>, usize)> {
    let roots: Vec<PathBuf> = config
        .roots
        .iter()
        .map(|root| config.base_dir.join(root))
        .collect();
    let files = PathDiscovery::new(roots, config.filter.clone()).discover()?;

    let mut entries: Vec<ArchiveEntry> = Vec::with_capacity(files.len());
    let mut by_name: HashMap<String, usize> = HashMap::new();
    let mut replaced = 0;

    for file in files {
        let name = entry_name(&file.path, &config.base_dir)?;
        match by_name.get(&name) {
            Some(&slot) => {
                warn!(
                    entry = %name,
                    previous = %entries[slot].path.display(),
                    replacement = %file.path.display(),
                    "duplicate archive entry, keeping the later file"
                );
                entries[slot].path = file.path;
                replaced += 1;
            }
            None => {
                by_name.insert(name.clone(), entries.len());
                entries.push(ArchiveEntry {
                    name,
                    path: file.path,
                });
            }
        }
    }

    Ok((entries, replaced))
}

/// Build the archive at `dest`, overwriting any existing file.
///
/// Writes one `Writing <name>` line to `progress` per stored entry.
pub fn write_archive(
    config: &ArchiveConfig,
    dest: &Path,
    mut progress: impl Write,
) -> Result<ArchiveSummary> {
    let (entries, replaced) = collect_entries(config)?;

    let file = File::create(dest).with_context(|| format!("creating {}", dest.display()))?;
    let mut zip = ZipWriter::new(file);

    for entry in &entries {
        writeln!(progress, "Writing {}", entry.name)?;
        add_file(&mut zip, entry)?;
    }

    zip.finish()
        .with_context(|| format!("finalizing {}", dest.display()))?;
    debug!(archive = %dest.display(), entries = entries.len(), "archive written");

    Ok(ArchiveSummary {
        entries: entries.len(),
        replaced,
    })
}

fn add_file<W: Write + io::Seek>(zip: &mut ZipWriter<W>, entry: &ArchiveEntry) -> Result<()> {
    let meta = fs::metadata(&entry.path)
        .with_context(|| format!("reading metadata of {}", entry.path.display()))?;
    let options = entry_options(&meta);

    zip.start_file(entry.name.as_str(), options)
        .with_context(|| format!("adding {} to archive", entry.name))?;
    let mut source =
        File::open(&entry.path).with_context(|| format!("opening {}", entry.path.display()))?;
    io::copy(&mut source, zip).with_context(|| format!("compressing {}", entry.path.display()))?;
    Ok(())
}

fn entry_options(meta: &fs::Metadata) -> SimpleFileOptions {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .large_file(meta.len() >= u64::from(u32::MAX));

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(meta.permissions().mode())
    };

    options
}

/// Path of `path` relative to `base`, joined with `/`.
fn entry_name(path: &Path, base: &Path) -> Result<String> {
    let relative = path.strip_prefix(base).map_err(|_| {
        anyhow!(
            "{} is not under archive base {}",
            path.display(),
            base.display()
        )
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            _ => return Err(anyhow!("cannot store {} in archive", path.display())),
        }
    }

    if parts.is_empty() {
        return Err(anyhow!("empty archive entry name for {}", path.display()));
    }
    Ok(parts.join("/"))
}
