//! pr-mill binary entry point

mod cli;

use anstream::eprintln;
use clap::Parser;
use cli::{Cli, Stylize};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::run(cli).await {
        eprintln!();
        eprintln!("{}", format!("❌ Error: {e}").error());
        std::process::exit(1);
    }
}
