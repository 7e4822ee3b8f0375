use std::time::{Duration, Instant};

use fake_user_agent::get_rua;
use rand::Rng;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, DNT, REFERER,
    UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};
use reqwest::Client;

pub enum FetchOutcome {
    Success(String),
    Blocked(u16),
    Failure(anyhow::Error),
}

fn base_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(REFERER, HeaderValue::from_static("https://www.google.com/"));
    headers.insert(DNT, HeaderValue::from_static("1"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers
}

/// One client per run, reused across every request so cookies carry over.
pub fn build_client(timeout_secs: u64) -> reqwest::Result<Client> {
    Client::builder()
        .default_headers(base_headers())
        .cookie_store(true)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

/// Issues a single GET with a freshly rotated user agent. 403 is reported as
/// Blocked; any other non-2xx status, timeout or transport error as Failure,
/// with the attempt detail carried in the error for the caller's log line.
/// No retries, the caller moves on to the next URL either way.
pub async fn fetch(client: &Client, url: &str) -> FetchOutcome {
    let started = Instant::now();

    match client.get(url).header(USER_AGENT, get_rua()).send().await {
        Ok(response) => {
            let status = response.status();
            if status.as_u16() == 403 {
                return FetchOutcome::Blocked(status.as_u16());
            }
            if !status.is_success() {
                return FetchOutcome::Failure(anyhow::anyhow!(
                    "unexpected status {} from {} after {:?}",
                    status,
                    url,
                    started.elapsed()
                ));
            }
            match response.text().await {
                Ok(body) => {
                    log::info!(
                        "Fetched {} ({} bytes) in {:?}",
                        url,
                        body.len(),
                        started.elapsed()
                    );
                    FetchOutcome::Success(body)
                }
                Err(e) => FetchOutcome::Failure(
                    anyhow::Error::from(e)
                        .context(format!("failed to read body from {}", url)),
                ),
            }
        }
        Err(e) => FetchOutcome::Failure(anyhow::Error::from(e).context(format!(
            "no response from {} after {:?}",
            url,
            started.elapsed()
        ))),
    }
}

/// Random pause between requests to keep the request rate unremarkable.
/// Called after every request, success or not. Bounds are inclusive, so a
/// fixed delay with min == max is a valid configuration.
pub async fn throttle_delay(min_secs: f64, max_secs: f64) {
    let delay = rand::thread_rng().gen_range(min_secs..=max_secs);
    log::debug!("Sleeping for {:.2} seconds", delay);
    tokio::time::sleep(Duration::from_secs_f64(delay)).await;
}
