use clap::Parser;
use sincro_dashboard::cli::{run, Cli};
use sincro_dashboard::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
