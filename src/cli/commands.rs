use std::path::PathBuf;

use serde::Serialize;
use tracing::Level;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::loaders::{SectorProgressLoader, SeparationDetailLoader};
use crate::payloads::{SectorPayload, SeparationPayload};
use crate::settings::Settings;
use crate::utils::progress::ProgressReporter;

pub fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Sectors { data_dir, pretty } => {
            let dir = resolve_data_dir(data_dir, &settings);
            let loader = SectorProgressLoader::with_quotas(settings.quota_table());

            let progress = ProgressReporter::new_spinner("Loading sector progress...", false);
            let payload = SectorPayload::from_result(loader.load(&dir));
            progress.finish_and_clear();

            print_json(&payload, pretty)?;
        }

        Commands::Separation { data_dir, pretty } => {
            let dir = resolve_data_dir(data_dir, &settings);
            let loader = SeparationDetailLoader::new();

            let progress = ProgressReporter::new_spinner("Loading separation detail...", false);
            let payload = SeparationPayload::from_result(loader.load(&dir));
            progress.finish_and_clear();

            print_json(&payload, pretty)?;
        }
    }

    Ok(())
}

fn resolve_data_dir(override_dir: Option<PathBuf>, settings: &Settings) -> PathBuf {
    override_dir.unwrap_or_else(|| settings.data_dir.clone())
}

// Loader failures are rendered inside the payload rather than as process
// failures, matching the endpoint contract the front end expects.
fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}
