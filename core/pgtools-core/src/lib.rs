//! pgtools-core: build-support file tooling for the game project
//!
//! Two independent jobs share this crate:
//!
//! - **Packaging** ([`archive`]): collect editor binaries matching a set of
//!   filename patterns from fixed roots and store them in a deflate zip,
//!   named by their path relative to the project root.
//! - **Copyright headers** ([`normalize`]): read the canonical notice from
//!   `config/DefaultGame.ini`, then make sure every C++, C# and Python file
//!   under `source/` and `Tools/` starts with it, written in that file's
//!   comment syntax.
//!
//! Filename patterns are regular expressions matched from the start of the
//! base name ([`patterns::PatternSet`]), so `.*\.h` also selects `.hpp`.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use pgtools_core::normalize::{normalize_tree, CopyrightConfig, NormalizeMode};
//! use pgtools_core::notice::load_notice;
//!
//! let root = Path::new(".");
//! let config = CopyrightConfig::project_sources()?;
//! let notice = load_notice(root, &config.notice)?.expect("notice configured");
//!
//! let summary = normalize_tree(root, &config, &notice, NormalizeMode::Fix, std::io::stdout())?;
//! println!("{} files updated", summary.updated);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod archive;
pub mod comment;
pub mod discovery;
pub mod header;
pub mod normalize;
pub mod notice;
pub mod patterns;
