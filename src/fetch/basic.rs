use std::time::Duration;

use super::client::HttpClient;
use anyhow::Result;
use async_trait::async_trait;

/// Production [`HttpClient`] backed by a pooled `reqwest::Client`.
///
/// One instance serves the whole batch run, so the remote service sees a
/// single session rather than 24 fresh connections.
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self(client))
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.0.execute(req).await
    }
}
