use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    // Log to stderr; `RUST_LOG=debug` shows layout and QR details.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    cli::run(cli::Cli::parse())
}
