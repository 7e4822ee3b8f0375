use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::services::analysis::{Analysis, Tally};

#[derive(Serialize)]
struct Summary<'a> {
    total_jobs: usize,
    unique_companies: usize,
    countries_covered: usize,
    job_categories: usize,
    data_sources: usize,
    top_roles: &'a [Tally],
    country_distribution: &'a [Tally],
    source_distribution: &'a [Tally],
}

/// Writes the classified dataset and the run summary as JSON into the output
/// directory. Rendering to other formats is left to downstream consumers of
/// these files.
pub fn export_reports(analysis: &Analysis, output_dir: &str) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir))?;

    let jobs_path = Path::new(output_dir).join("mena_ai_ml_jobs_data.json");
    let jobs_json = serde_json::to_string_pretty(&analysis.jobs)?;
    fs::write(&jobs_path, jobs_json)
        .with_context(|| format!("failed to write {}", jobs_path.display()))?;
    log::info!("JSON data exported to {}", jobs_path.display());

    let summary = Summary {
        total_jobs: analysis.total_jobs(),
        unique_companies: analysis.unique_companies(),
        countries_covered: analysis.countries_covered(),
        job_categories: analysis.categories_covered(),
        data_sources: analysis.sources_covered(),
        top_roles: &analysis.top_roles,
        country_distribution: &analysis.country_distribution,
        source_distribution: &analysis.source_distribution,
    };
    let summary_path = Path::new(output_dir).join("mena_ai_ml_jobs_summary.json");
    let summary_json = serde_json::to_string_pretty(&summary)?;
    fs::write(&summary_path, summary_json)
        .with_context(|| format!("failed to write {}", summary_path.display()))?;
    log::info!("Summary exported to {}", summary_path.display());

    Ok(())
}
