//! Checking and rewriting the leading notice block of a source file

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// True when the file's first lines equal `notice_lines`, in order.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Only the terminator is
/// stripped before comparing; other whitespace must match exactly.
pub fn is_compliant(path: &Path, notice_lines: &[String]) -> Result<bool> {
    let text = read_source(path)?;
    Ok(starts_with_notice(&text, notice_lines))
}

/// Replace the file's leading comment block with `notice_lines`.
///
/// Every leading line whose first non-blank text starts with
/// `comment_prefix` is dropped, whatever it says. A blank separator follows
/// the notice when the remaining first line has content. The file is
/// rewritten with `\n` line endings.
pub fn rewrite_header(path: &Path, notice_lines: &[String], comment_prefix: &str) -> Result<()> {
    let text = read_source(path)?;
    let lines = split_lines(&text).map(str::to_string).collect();

    let rewritten = splice_notice(lines, notice_lines, comment_prefix);

    let mut out = String::new();
    for line in &rewritten {
        out.push_str(line);
        out.push('\n');
    }
    fs::write(path, out).with_context(|| format!("writing {}", path.display()))
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Lines of `text` with their terminators removed. A final terminator does
/// not start an extra empty line.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(at) => {
                let line = &rest[..at];
                let skip = if rest[at..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[at + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

pub(crate) fn starts_with_notice(text: &str, notice_lines: &[String]) -> bool {
    let mut lines = split_lines(text);
    notice_lines
        .iter()
        .all(|expected| lines.next() == Some(expected.as_str()))
}

pub(crate) fn splice_notice(
    mut lines: Vec<String>,
    notice_lines: &[String],
    comment_prefix: &str,
) -> Vec<String> {
    let first_code = lines
        .iter()
        .position(|line| !line.trim_start().starts_with(comment_prefix))
        .unwrap_or(lines.len());
    lines.drain(..first_code);

    let mut result = Vec::with_capacity(notice_lines.len() + 1 + lines.len());
    result.extend(notice_lines.iter().cloned());
    if lines.first().is_some_and(|first| !first.trim().is_empty()) {
        result.push(String::new());
    }
    result.extend(lines);
    result
}
