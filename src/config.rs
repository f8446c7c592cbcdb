//! Request configuration for the schedule API.
//!
//! Everything the batch fetcher needs to talk to the remote service lives in
//! [`FetchConfig`] so tests can substitute endpoints and headers instead of
//! patching module globals.

use std::time::Duration;

/// Student gender partition, per the remote API's `stdGnr` convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cohort {
    Male,
    Female,
}

impl Cohort {
    /// Both cohorts, in the order the batch visits them.
    pub const ALL: [Cohort; 2] = [Cohort::Male, Cohort::Female];

    /// The `stdGnr` query parameter value the API expects.
    pub fn code(self) -> &'static str {
        match self {
            Cohort::Male => "11",
            Cohort::Female => "12",
        }
    }

    /// Human label used in log output.
    pub fn label(self) -> &'static str {
        match self {
            Cohort::Male => "Male",
            Cohort::Female => "Female",
        }
    }

    /// Lowercase stem used in output file names.
    pub fn file_stem(self) -> &'static str {
        match self {
            Cohort::Male => "male",
            Cohort::Female => "female",
        }
    }
}

/// Configuration for one batch run against the schedule API.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Endpoint returning a JSON array of course records per department.
    pub api_url: String,
    /// Static headers the remote service requires for acceptance.
    pub headers: Vec<(String, String)>,
    /// Department codes to query, one request per code per cohort.
    pub departments: Vec<String>,
    /// Pause after every request attempt, to throttle load on the service.
    pub delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_url:
                "https://www.kfu.edu.sa/_vti_bin/StudySchedules/StudySchedules.svc/GetCoursesByDept"
                    .to_string(),
            headers: vec![
                (
                    "User-Agent".to_string(),
                    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                        .to_string(),
                ),
                ("Accept".to_string(), "application/json;odata=verbose".to_string()),
                (
                    "Referer".to_string(),
                    "https://www.kfu.edu.sa/ar/Deans/AdmissionRecordsDeanship/Pages/SSMain.aspx"
                        .to_string(),
                ),
                ("X-Requested-With".to_string(), "XMLHttpRequest".to_string()),
            ],
            departments: [
                "0901", "0911", "0921", "0902", "0912", "0922", "0903", "0913", "0923", "0904",
                "0914", "0924",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            delay: Duration::from_secs(1),
        }
    }
}
