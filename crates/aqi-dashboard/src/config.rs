// File: crates/aqi-dashboard/src/config.rs
// Summary: Dashboard settings loaded from TOML; every field has a default.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use aqi_chart::{theme, Insets, RenderOptions};
use aqi_core::{CityTable, SeasonPolicy};
use aqi_feed::{Feed, FeedClient};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::ViewMode;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the optional live feed.
    pub api_base_url: String,
    /// Skip the live feed entirely and use synthetic data.
    pub offline: bool,
    /// Seconds between city-list refreshes in `watch`.
    pub refresh_interval_secs: u64,
    /// Per-request timeout for the live feed.
    pub request_timeout_secs: u64,
    /// "winter", "summer", "monsoon", "post-monsoon" or "calendar".
    pub season: String,
    pub default_city: String,
    /// Chart surface size and uniform padding, in pixels.
    pub width: i32,
    pub height: i32,
    pub padding: u32,
    /// "light" or "dark".
    pub theme: String,
    pub output_dir: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            offline: false,
            refresh_interval_secs: 300,
            request_timeout_secs: 10,
            season: "winter".to_string(),
            default_city: "Delhi".to_string(),
            width: 800,
            height: 320,
            padding: 50,
            theme: "light".to_string(),
            output_dir: PathBuf::from("target/out"),
        }
    }
}

impl DashboardConfig {
    /// Load from `path`, returning defaults if there is no file or it does not parse.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else { return Self::default() };
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                log::warn!("ignoring invalid config {}: {e}", path.display());
                Self::default()
            }),
            Err(e) => {
                log::warn!("cannot read config {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn season_policy(&self) -> SeasonPolicy {
        self.season.parse().unwrap_or_else(|e| {
            log::warn!("{e}; using the default season");
            SeasonPolicy::default()
        })
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn render_options(&self, mode: ViewMode) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            insets: Insets::uniform(self.padding),
            theme: theme::find(&self.theme),
            label_step: mode.label_step(),
            ..RenderOptions::default()
        }
    }

    /// Feed honoring `offline`; the client is only built when it will be used.
    pub fn feed(&self, cities: Arc<CityTable>) -> Result<Feed> {
        let season = self.season_policy();
        if self.offline {
            return Ok(Feed::offline(cities, season));
        }
        let client = FeedClient::new(self.api_base_url.clone(), self.request_timeout())
            .with_context(|| format!("building feed client for {}", self.api_base_url))?;
        Ok(Feed::new(Some(client), cities, season))
    }
}
