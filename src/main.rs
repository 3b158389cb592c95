use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    demoji_cli::run_cli()
}
