use itertools::Itertools;
use serde::Serialize;

use crate::domain::job::{classify, Category, JobRecord};

/// A normalized record paired with its assigned category.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedJob {
    #[serde(flatten)]
    pub record: JobRecord,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tally {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct Analysis {
    pub jobs: Vec<ClassifiedJob>,
    pub top_roles: Vec<Tally>,
    pub country_distribution: Vec<Tally>,
    pub source_distribution: Vec<Tally>,
}

impl Analysis {
    pub fn total_jobs(&self) -> usize {
        self.jobs.len()
    }

    pub fn unique_companies(&self) -> usize {
        self.jobs.iter().map(|job| &job.record.company).unique().count()
    }

    pub fn countries_covered(&self) -> usize {
        self.jobs.iter().map(|job| &job.record.country).unique().count()
    }

    pub fn categories_covered(&self) -> usize {
        self.jobs.iter().map(|job| job.category).unique().count()
    }

    pub fn sources_covered(&self) -> usize {
        self.jobs.iter().map(|job| &job.record.source).unique().count()
    }
}

/// Classifies the collection in one batch and derives the three frequency
/// breakdowns: by category, by country (both top 10) and by source.
pub fn analyze(records: Vec<JobRecord>) -> Analysis {
    log::info!("Analyzing job data...");

    let jobs: Vec<ClassifiedJob> = records
        .into_iter()
        .map(|record| {
            let category = classify(&record.title);
            ClassifiedJob { record, category }
        })
        .collect();

    let top_roles: Vec<Tally> = frequency_breakdown(
        jobs.iter().map(|job| job.category.as_str().to_string()),
    )
    .into_iter()
    .take(10)
    .collect();
    let country_distribution: Vec<Tally> =
        frequency_breakdown(jobs.iter().map(|job| job.record.country.clone()))
            .into_iter()
            .take(10)
            .collect();
    let source_distribution =
        frequency_breakdown(jobs.iter().map(|job| job.record.source.clone()));

    let analysis = Analysis {
        jobs,
        top_roles,
        country_distribution,
        source_distribution,
    };

    log::info!(
        "Analyzed {} jobs across {} categories",
        analysis.total_jobs(),
        analysis.categories_covered()
    );
    log::info!("Jobs from {} countries", analysis.countries_covered());
    log::info!("Data from {} sources", analysis.sources_covered());

    analysis
}

/// Counts occurrences and orders by descending count, label as tie-breaker
/// so the output is deterministic.
pub fn frequency_breakdown<I>(values: I) -> Vec<Tally>
where
    I: IntoIterator<Item = String>,
{
    values
        .into_iter()
        .counts()
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)))
        .map(|(label, count)| Tally { label, count })
        .collect()
}
