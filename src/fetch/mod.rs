//! Batch fetcher for the course-schedule API.
//!
//! Visits every (department, cohort) pair exactly once, appending whatever
//! the API returns for each pair to the matching cohort accumulator. A
//! failed pair contributes nothing and never aborts the batch.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Request, Url};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::{Cohort, FetchConfig};
use crate::record::CourseRecord;

/// Fetches course listings for every department in both cohorts.
///
/// Per-pair failures (transport errors, non-2xx statuses, bodies that are
/// not a JSON array of records) are logged and skipped. Only configuration
/// problems that prevent the batch from starting at all (bad endpoint URL,
/// malformed static header) return an error.
pub async fn fetch_courses<C: HttpClient>(
    client: &C,
    config: &FetchConfig,
) -> Result<(Vec<CourseRecord>, Vec<CourseRecord>)> {
    let base: Url = config
        .api_url
        .parse()
        .with_context(|| format!("invalid API URL: {}", config.api_url))?;
    let headers = static_headers(config)?;

    let mut male = Vec::new();
    let mut female = Vec::new();

    for cohort in Cohort::ALL {
        for dept in &config.departments {
            let records = match cohort {
                Cohort::Male => &mut male,
                Cohort::Female => &mut female,
            };
            fetch_pair(client, &base, &headers, dept, cohort, records).await;

            // Be polite to the server, even after a failed attempt.
            tokio::time::sleep(config.delay).await;
        }
    }

    Ok((male, female))
}

/// Issues one request and appends any returned records to `records`.
async fn fetch_pair<C: HttpClient>(
    client: &C,
    base: &Url,
    headers: &HeaderMap,
    dept: &str,
    cohort: Cohort,
    records: &mut Vec<CourseRecord>,
) {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("deptid", dept)
        .append_pair("stdGnr", cohort.code());

    let mut req = Request::new(Method::GET, url);
    *req.headers_mut() = headers.clone();

    let resp = match client.execute(req).await {
        Ok(resp) => resp,
        Err(e) => {
            warn!(dept, cohort = cohort.label(), error = %e, "Request failed");
            return;
        }
    };

    let status = resp.status();
    if !status.is_success() {
        warn!(dept, cohort = cohort.label(), status = %status, "Fetch rejected by server");
        return;
    }

    let body: Value = match resp.json().await {
        Ok(body) => body,
        Err(e) => {
            warn!(dept, cohort = cohort.label(), error = %e, "Failed to read response body");
            return;
        }
    };

    // The API's error contract is undocumented; anything that isn't an array
    // of records is treated as "no data" rather than an error.
    match serde_json::from_value::<Vec<CourseRecord>>(body) {
        Ok(items) => {
            info!(dept, cohort = cohort.label(), count = items.len(), "Fetched");
            records.extend(items);
        }
        Err(_) => {
            debug!(dept, cohort = cohort.label(), "Body is not a course list, skipping");
        }
    }
}

fn static_headers(config: &FetchConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .with_context(|| format!("invalid header name: {name}"))?;
        let value = HeaderValue::from_str(value)
            .with_context(|| format!("invalid value for header {name}"))?;
        headers.insert(name, value);
    }
    Ok(headers)
}
