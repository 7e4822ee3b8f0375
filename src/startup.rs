use anyhow::Result;

use crate::configuration::Settings;
use crate::domain::source::source_registry;
use crate::services::analysis::{self, Analysis};
use crate::services::{exporter, fetcher, pipeline};

/// Runs the whole batch: scrape every registered source, classify and
/// analyze the collection, export the JSON artifacts.
pub async fn run(settings: Settings) -> Result<Analysis> {
    let client = fetcher::build_client(settings.scraper.request_timeout_secs)?;
    let sources = source_registry();

    let jobs = pipeline::scrape_all_sources(&client, &sources, &settings.scraper).await?;
    let analysis = analysis::analyze(jobs);
    exporter::export_reports(&analysis, &settings.output.directory)?;

    Ok(analysis)
}
