//! Start-anchored filename patterns

use anyhow::{Context, Result};
use regex::Regex;

/// A set of regular expressions matched against file base names.
///
/// Each pattern must match starting at the first character of the name but
/// may stop anywhere, so `.*\.h` also accepts `foo.hpp`.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    compiled: Vec<Regex>,
}

impl PatternSet {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let compiled = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(&format!("^(?:{pattern})"))
                    .with_context(|| format!("invalid regex: {pattern}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { compiled })
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// True when at least one pattern matches at the start of `name`.
    pub fn matches_any(&self, name: &str) -> bool {
        self.compiled.iter().any(|re| re.is_match(name))
    }
}

/// Include/exclude selection over file base names.
///
/// A name is accepted when an include pattern matches it, or when exclude
/// patterns are configured and none of them match. With both sets empty
/// nothing is accepted.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    include: PatternSet,
    exclude: PatternSet,
}

impl FileFilter {
    pub fn new(include: PatternSet, exclude: PatternSet) -> Self {
        Self { include, exclude }
    }

    pub fn including(include: PatternSet) -> Self {
        Self::new(include, PatternSet::default())
    }

    pub fn accepts(&self, name: &str) -> bool {
        if !self.include.is_empty() && self.include.matches_any(name) {
            return true;
        }
        !self.exclude.is_empty() && !self.exclude.matches_any(name)
    }
}
