//! Loading the canonical copyright notice from the game config

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Where the notice lives: an INI-style file and the key holding the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeSource {
    /// Config file path, relative to the project root.
    pub config_file: PathBuf,
    pub property: String,
}

impl Default for NoticeSource {
    fn default() -> Self {
        Self {
            config_file: Path::new("config").join("DefaultGame.ini"),
            property: "CopyrightNotice".to_string(),
        }
    }
}

impl NoticeSource {
    pub fn path_under(&self, root: &Path) -> PathBuf {
        root.join(&self.config_file)
    }
}

/// The notice text for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    text: String,
}

impl Notice {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The notice split on line breaks.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

/// Find the first `<property>=` line in the config file under `root`.
///
/// Returns `Ok(None)` when no such line exists or its value is blank. The
/// value is a single physical line; continuation syntax is not interpreted.
/// A missing or unreadable config file is an error.
pub fn load_notice(root: &Path, source: &NoticeSource) -> Result<Option<Notice>> {
    let path = source.path_under(root);
    let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
    find_property(BufReader::new(file), &source.property)
        .with_context(|| format!("reading {}", path.display()))
}

fn find_property(reader: impl BufRead, property: &str) -> Result<Option<Notice>> {
    let key_prefix = format!("{property}=");

    for line in reader.lines() {
        let line = line?;
        if let Some(value) = line.trim().strip_prefix(&key_prefix) {
            let value = value.trim();
            if value.is_empty() {
                return Ok(None);
            }
            return Ok(Some(Notice::new(value)));
        }
    }

    Ok(None)
}
