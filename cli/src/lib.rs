//! pgtools command-line front ends

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pgtools_core::archive::{write_archive, ArchiveConfig};
use pgtools_core::normalize::{normalize_tree, CopyrightConfig, NormalizeMode};
use pgtools_core::notice::load_notice;

/// Package editor binaries into a zip archive.
#[derive(Debug, Parser)]
#[command(
    name = "zip-editor-deps",
    version,
    about = "Zip the project's editor binaries (paths are stored relative to the current directory)"
)]
pub struct ZipCli {
    /// Output zip file
    #[arg(value_name = "OUTPUT", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Print debug diagnostics on stderr (repeat for more)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Normalize the copyright header of every source file.
#[derive(Debug, Parser)]
#[command(
    name = "fix-copyright",
    version,
    about = "Ensure source files start with the copyright notice from config/DefaultGame.ini"
)]
pub struct CopyrightCli {
    /// Project root (defaults to the current directory)
    #[arg(long = "root", value_hint = ValueHint::DirPath)]
    root: Option<PathBuf>,

    /// Report files missing the notice without rewriting them
    #[arg(long = "check", action = ArgAction::SetTrue)]
    check: bool,

    /// Print debug diagnostics on stderr (repeat for more)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl ZipCli {
    pub fn verbose(&self) -> u8 {
        self.verbose
    }
}

impl CopyrightCli {
    pub fn verbose(&self) -> u8 {
        self.verbose
    }
}

/// Parse arguments, exiting 1 on usage errors and 0 after `--help`/`--version`.
pub fn parse_or_exit<C: Parser>() -> C {
    match C::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if let Err(io_err) = err.print() {
                eprintln!("error: {io_err}");
            }
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    // A subscriber installed earlier in the process keeps receiving events.
    if tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .try_init()
        .is_err()
    {
        tracing::debug!("log subscriber already installed");
    }
}

/// Build the editor binary archive named on the command line.
pub fn run_zip(cli: &ZipCli) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = ArchiveConfig::editor_binaries()?;
    zip_with(cli, &config, &mut handle)
}

fn zip_with(cli: &ZipCli, config: &ArchiveConfig, mut out: impl Write) -> Result<()> {
    let dest = cli.output.display();
    writeln!(out, "Zipping editor binaries to {dest}")?;

    let summary = write_archive(config, &cli.output, &mut out)?;
    info!(entries = summary.entries, replaced = summary.replaced, "archive complete");

    writeln!(out)?;
    writeln!(out, "Zip created successfully: {dest}")?;
    Ok(())
}

/// Normalize headers under the chosen root, or only report in `--check` mode.
pub fn run_copyright(cli: &CopyrightCli) -> Result<()> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => env::current_dir().context("resolving current directory")?,
    };
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = CopyrightConfig::project_sources()?;
    copyright_with(cli, root, &config, &mut handle)
}

fn copyright_with(
    cli: &CopyrightCli,
    root: PathBuf,
    config: &CopyrightConfig,
    mut out: impl Write,
) -> Result<()> {
    let mode = if cli.check {
        NormalizeMode::Check
    } else {
        NormalizeMode::Fix
    };

    match mode {
        NormalizeMode::Fix => writeln!(out, "Replacing copyright notices in {}...", root.display())?,
        NormalizeMode::Check => writeln!(out, "Checking copyright notices in {}...", root.display())?,
    }
    writeln!(out)?;

    let notice = load_notice(&root, &config.notice)?.ok_or_else(|| {
        anyhow!(
            "Unable to get copyright notice from config in {}",
            config.notice.path_under(&root).display()
        )
    })?;

    let summary = normalize_tree(&root, config, &notice, mode, &mut out)?;
    info!(
        scanned = summary.scanned,
        non_compliant = summary.non_compliant,
        updated = summary.updated,
        "normalization complete"
    );

    writeln!(out)?;
    match mode {
        NormalizeMode::Fix => {
            writeln!(out, "Completed successfully: {} files updated.", summary.updated)?;
            Ok(())
        }
        NormalizeMode::Check if summary.non_compliant > 0 => {
            out.flush()?;
            Err(anyhow!(
                "{} of {} files are missing the copyright notice",
                summary.non_compliant,
                summary.scanned
            ))
        }
        NormalizeMode::Check => {
            writeln!(out, "All {} files carry the copyright notice.", summary.scanned)?;
            Ok(())
        }
    }
}
