// File: crates/aqi-feed/src/client.rs
// Summary: HTTP client for the optional live feed (`/api/cities`, forecast, hourly, calculator).

use std::time::Duration;

use aqi_core::{CalculatedAqi, ForecastPoint, HourlyPoint, PollutantReading};
use chrono::NaiveDate;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::error::{FetchError, Result};
use crate::reading::CityReading;

/// Thin JSON client; one attempt per call, bounded by the client timeout.
#[derive(Clone, Debug)]
pub struct FeedClient {
    http: Client,
    base_url: String,
}

impl FeedClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Current readings for every city the server knows.
    pub async fn cities(&self) -> Result<Vec<CityReading>> {
        self.get_json(self.url("/api/cities")).await
    }

    /// Seven-day forecast for `city`.
    pub async fn forecast(&self, city: &str) -> Result<Vec<ForecastPoint>> {
        self.get_json(self.url(&format!("/api/forecast/{city}"))).await
    }

    /// Hourly breakdown of `date` for `city`.
    pub async fn hourly(&self, city: &str, date: NaiveDate) -> Result<Vec<HourlyPoint>> {
        self.get_json(self.url(&format!("/api/hourly/{city}/{}", date.format("%Y-%m-%d")))).await
    }

    /// Server-side AQI from raw concentrations.
    pub async fn calculate(&self, reading: &PollutantReading) -> Result<CalculatedAqi> {
        let url = self.url("/api/calculate-aqi");
        let response = self.http.post(&url).json(reading).send().await?;
        Self::decode(url, response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        let response = self.http.get(&url).send().await?;
        Self::decode(url, response).await
    }

    async fn decode<T: DeserializeOwned>(url: String, response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode { url, source })
    }
}
