use anyhow::{bail, Result};
use reqwest::Client;
use scraper::Html;
use url::Url;

use crate::configuration::ScraperSettings;
use crate::domain::country::infer_country;
use crate::domain::job::JobRecord;
use crate::domain::relevance::is_relevant;
use crate::domain::source::SourceConfig;
use crate::services::extractor::{self, PartialRecord};
use crate::services::fetcher::{self, FetchOutcome};

/// Walks every source and search URL in sequence, fetching, extracting and
/// normalizing as it goes. A blocked or failed URL only loses its own
/// contribution. The one fatal condition is an entirely empty run.
pub async fn scrape_all_sources(
    client: &Client,
    sources: &[SourceConfig],
    settings: &ScraperSettings,
) -> Result<Vec<JobRecord>> {
    log::info!("Starting comprehensive job search");

    let mut all_jobs: Vec<JobRecord> = vec![];

    for source in sources {
        log::info!("Scraping {}", source.display_name());
        let mut source_jobs: Vec<JobRecord> = vec![];

        for url in source.search_urls {
            log::info!("Fetching: {}", url);
            let outcome = fetcher::fetch(client, url).await;
            let jobs = jobs_from_outcome(outcome, source, settings.max_cards_per_page);
            source_jobs.extend(jobs);
            log::info!("Found {} jobs on {}", source_jobs.len(), url);

            fetcher::throttle_delay(settings.min_delay_secs, settings.max_delay_secs).await;
        }

        if source_jobs.is_empty() {
            log::warn!("No jobs found from {}", source.name);
        } else {
            log::info!("Added {} jobs from {}", source_jobs.len(), source.name);
            all_jobs.extend(source_jobs);
        }
    }

    if all_jobs.is_empty() {
        bail!("no jobs were collected from any source");
    }
    log::info!("Total jobs collected: {}", all_jobs.len());

    Ok(all_jobs)
}

/// Turns one fetch outcome into that URL's records. Blocked and failed
/// fetches contribute nothing and never abort the loop around them.
pub fn jobs_from_outcome(
    outcome: FetchOutcome,
    source: &SourceConfig,
    max_cards: usize,
) -> Vec<JobRecord> {
    match outcome {
        FetchOutcome::Success(body) => collect_jobs_from_page(&body, source, max_cards),
        FetchOutcome::Blocked(status) => {
            log::warn!("Access denied to {} (status {})", source.name, status);
            vec![]
        }
        FetchOutcome::Failure(e) => {
            log::error!("Error scraping {}: {:?}", source.name, e);
            vec![]
        }
    }
}

pub fn collect_jobs_from_page(html: &str, source: &SourceConfig, max_cards: usize) -> Vec<JobRecord> {
    let document = Html::parse_document(html);

    extractor::extract_cards(&document, &source.selectors, max_cards)
        .into_iter()
        .filter_map(|card| extractor::extract_fields(&card, &source.selectors))
        .filter(|partial| is_relevant(&partial.title))
        .map(|partial| normalize(partial, source))
        .collect()
}

/// Resolves the link against the source's base URL, infers the country and
/// stamps the display form of the source name.
pub fn normalize(partial: PartialRecord, source: &SourceConfig) -> JobRecord {
    JobRecord {
        link: resolve_link(source.base_url, &partial.link),
        country: infer_country(&partial.location),
        source: source.display_name(),
        title: partial.title,
        company: partial.company,
        location: partial.location,
    }
}

/// Joins an href against the base URL. Relative, protocol-relative and
/// already-absolute hrefs all resolve; anything unparseable passes through
/// untouched.
pub fn resolve_link(base_url: &str, href: &str) -> String {
    match Url::parse(base_url) {
        Ok(base) => match base.join(href) {
            Ok(resolved) => resolved.to_string(),
            Err(_) => href.to_string(),
        },
        Err(_) => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{collect_jobs_from_page, jobs_from_outcome, normalize, resolve_link};
    use crate::domain::job::{classify, Category};
    use crate::services::extractor::PartialRecord;
    use crate::services::fetcher::FetchOutcome;
    use crate::domain::source::{SelectorSet, SourceConfig};

    fn test_source() -> SourceConfig {
        SourceConfig {
            name: "wuzzuf",
            base_url: "https://wuzzuf.net",
            search_urls: &["https://wuzzuf.net/search/jobs/?q=machine+learning"],
            selectors: SelectorSet {
                card: "div.job-card",
                title: "h2.title",
                company: "div.company",
                location: "span.location",
                link: "a.apply",
            },
        }
    }

    #[test]
    fn resolves_relative_href_against_base() {
        assert_eq!(
            resolve_link("https://wuzzuf.net", "/jobs/123"),
            "https://wuzzuf.net/jobs/123"
        );
    }

    #[test]
    fn absolute_href_is_unchanged() {
        assert_eq!(
            resolve_link("https://wuzzuf.net", "https://example.com/jobs/9"),
            "https://example.com/jobs/9"
        );
    }

    #[test]
    fn protocol_relative_href_inherits_scheme() {
        assert_eq!(
            resolve_link("https://wuzzuf.net", "//cdn.example.com/jobs/9"),
            "https://cdn.example.com/jobs/9"
        );
    }

    #[test]
    fn normalize_fills_country_link_and_source() {
        let partial = PartialRecord {
            title: "Machine Learning Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Dubai, UAE".to_string(),
            link: "/jobs/1".to_string(),
        };
        let record = normalize(partial, &test_source());

        assert_eq!(record.link, "https://wuzzuf.net/jobs/1");
        assert_eq!(record.country, "United Arab Emirates");
        assert_eq!(record.source, "Wuzzuf");
        assert_eq!(record.title, "Machine Learning Engineer");
    }

    #[test]
    fn page_yields_only_relevant_cards() {
        let html = r#"
            <div class="job-card">
                <h2 class="title">Senior Data Scientist</h2>
                <div class="company">Acme</div>
                <span class="location">Cairo</span>
                <a class="apply" href="/jobs/1">Apply</a>
            </div>
            <div class="job-card">
                <h2 class="title">Junior Business Analyst (AI team)</h2>
                <div class="company">Globex</div>
                <span class="location">Riyadh</span>
                <a class="apply" href="/jobs/2">Apply</a>
            </div>
            <div class="job-card">
                <h2 class="title">Office Coordinator</h2>
                <div class="company">Initech</div>
                <span class="location">Doha</span>
                <a class="apply" href="/jobs/3">Apply</a>
            </div>"#;
        let source = test_source();
        let jobs = collect_jobs_from_page(html, &source, 25);

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Senior Data Scientist");
        assert_eq!(jobs[1].title, "Junior Business Analyst (AI team)");
        assert_eq!(classify(&jobs[0].title), Category::DataScientist);
        assert_eq!(classify(&jobs[1].title), Category::DataAnalyst);
    }

    #[test]
    fn blocked_and_failed_fetches_yield_no_jobs() {
        let source = test_source();

        assert!(jobs_from_outcome(FetchOutcome::Blocked(403), &source, 25).is_empty());
        assert!(jobs_from_outcome(
            FetchOutcome::Failure(anyhow::anyhow!("connection reset")),
            &source,
            25
        )
        .is_empty());
    }
}
