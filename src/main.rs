mod cli;
mod config;
mod logging;
mod parsers;
mod services;
mod types;

use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_dir);
    cli.run()
}
