use crate::{
    error::Result,
    provider::{BoardData, DataProvider},
};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_API_URL: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Fetches board data from the HTTP API
pub struct HttpDataProvider {
    http: Client,
    url: String,
}

impl HttpDataProvider {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DataProvider for HttpDataProvider {
    async fn fetch(&self) -> Result<BoardData> {
        let response = self.http.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        let data: BoardData = response.json().await?;

        info!(
            url = %self.url(),
            tickets = data.tickets.len(),
            users = data.users.len(),
            "board data fetched"
        );
        Ok(data)
    }
}
