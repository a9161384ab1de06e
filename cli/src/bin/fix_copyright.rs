//! Binary entrypoint for the copyright header normalizer

use pgtools_cli::{init_logging, parse_or_exit, run_copyright, CopyrightCli};

fn main() {
    let cli: CopyrightCli = parse_or_exit();
    init_logging(cli.verbose());

    if let Err(err) = run_copyright(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
