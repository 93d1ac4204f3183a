use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sincro-dashboard")]
#[command(about = "Warehouse order-separation dashboard data processor")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Settings file path")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate Sincronismo exports per sector and print the JSON payload
    Sectors {
        #[arg(short, long, help = "Directory containing the spreadsheet exports")]
        data_dir: Option<PathBuf>,

        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Aggregate Detalhes_Se pick-line exports and print the JSON payload
    Separation {
        #[arg(short, long, help = "Directory containing the spreadsheet exports")]
        data_dir: Option<PathBuf>,

        #[arg(long, default_value = "false")]
        pretty: bool,
    },
}
