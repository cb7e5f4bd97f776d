use clap::Parser;
use exttidy::cli::{Cli, run_cli};
use exttidy::output::OutputFormatter;

fn main() {
    let cli = Cli::parse();

    // Errors are reported on standard output and the process terminates
    // normally, without a distinguished exit code.
    if let Err(e) = run_cli(&cli.path, cli.dry_run) {
        OutputFormatter::error(&e.to_string());
    }
}
