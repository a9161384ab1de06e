//! Binary entrypoint for the editor binary packager

use pgtools_cli::{init_logging, parse_or_exit, run_zip, ZipCli};

fn main() {
    let cli: ZipCli = parse_or_exit();
    init_logging(cli.verbose());

    if let Err(err) = run_zip(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
