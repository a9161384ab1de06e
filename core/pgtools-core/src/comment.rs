//! Per-language line comment prefixes and notice formatting

use std::collections::HashMap;

use tracing::warn;

use crate::notice::Notice;

pub const DEFAULT_COMMENT_PREFIX: &str = "//";

/// Maps a lowercase file extension to its single-line comment prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentStyle {
    default_prefix: String,
    by_extension: HashMap<String, String>,
}

impl Default for CommentStyle {
    fn default() -> Self {
        Self::new(DEFAULT_COMMENT_PREFIX).with_extension("py", "#")
    }
}

impl CommentStyle {
    pub fn new(default_prefix: impl Into<String>) -> Self {
        Self {
            default_prefix: default_prefix.into(),
            by_extension: HashMap::new(),
        }
    }

    pub fn with_extension(mut self, ext: &str, prefix: impl Into<String>) -> Self {
        self.by_extension
            .insert(ext.to_ascii_lowercase(), prefix.into());
        self
    }

    /// Comment prefix for a file name, falling back to the default prefix.
    pub fn prefix_for(&self, file_name: &str) -> &str {
        let Some(ext) = file_extension(file_name) else {
            warn!(file = file_name, "unable to determine file extension");
            return &self.default_prefix;
        };
        self.by_extension
            .get(&ext.to_ascii_lowercase())
            .map(String::as_str)
            .unwrap_or(self.default_prefix.as_str())
    }
}

/// Text after the last `.`, or `None` when there is no dot or it ends the name.
pub fn file_extension(file_name: &str) -> Option<&str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

/// Prefix each notice line with `prefix` and one space.
pub fn format_notice_lines(notice: &Notice, prefix: &str) -> Vec<String> {
    notice.lines().map(|line| format!("{prefix} {line}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_rules() {
        assert_eq!(file_extension("Pawn.cpp"), Some("cpp"));
        assert_eq!(file_extension("Module.Build.cs"), Some("cs"));
        assert_eq!(file_extension("Makefile"), None);
        assert_eq!(file_extension("trailing."), None);
        assert_eq!(file_extension(".gitignore"), Some("gitignore"));
    }

    #[test]
    fn python_uses_hash_everything_else_slashes() {
        let style = CommentStyle::default();
        assert_eq!(style.prefix_for("fix_copyright.py"), "#");
        assert_eq!(style.prefix_for("Pawn.h"), "//");
        assert_eq!(style.prefix_for("PaperGolf.Target.cs"), "//");
        assert_eq!(style.prefix_for("README"), "//");
    }

    #[test]
    fn extension_lookup_ignores_case() {
        assert_eq!(CommentStyle::default().prefix_for("TOOL.PY"), "#");
    }

    #[test]
    fn formats_two_line_notice() {
        let notice = Notice::new("Line1\nLine2");
        assert_eq!(format_notice_lines(&notice, "#"), vec!["# Line1", "# Line2"]);
        assert_eq!(
            format_notice_lines(&notice, "//"),
            vec!["// Line1", "// Line2"]
        );
    }
}
