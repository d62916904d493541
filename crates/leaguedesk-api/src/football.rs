use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{League, Season, Standing};

pub const DEFAULT_BASE_URL: &str = "https://api-football-standings.azharimm.site";

/// Season used when the caller doesn't pick one
pub const DEFAULT_SEASON: i32 = 2023;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Which read operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Leagues,
    Standings,
    Seasons,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Leagues => write!(f, "leagues"),
            Operation::Standings => write!(f, "standings"),
            Operation::Seasons => write!(f, "seasons"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// Any failure of a read operation, tagged with the operation
    #[error("Failed to fetch {operation}: {reason}")]
    FetchFailed { operation: Operation, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl ApiError {
    fn fetch_failed(operation: Operation, reason: impl fmt::Display) -> Self {
        ApiError::FetchFailed {
            operation,
            reason: reason.to_string(),
        }
    }

    /// Operation name for fetch failures
    pub fn operation(&self) -> Option<Operation> {
        match self {
            ApiError::FetchFailed { operation, .. } => Some(*operation),
            ApiError::ClientBuild(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// `{ "data": ... }` wrapper every endpoint returns
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct StandingsData {
    standings: Vec<Standing>,
}

#[derive(Deserialize)]
struct SeasonsData {
    seasons: Vec<Season>,
}

/// Read-only client for the football standings API.
///
/// Each call is a single request with no retry; a failure is reported once.
pub struct FootballClient {
    client: reqwest::Client,
    base_url: String,
}

impl FootballClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Point the client at another host (mirrors, local fixtures)
    pub fn with_base_url(base_url: String, timeout: Duration) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("LeagueDesk/0.1.0"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All leagues the service knows about
    pub async fn leagues(&self) -> Result<Vec<League>> {
        let url = format!("{}/leagues", self.base_url);
        let body = self.get(Operation::Leagues, &url, &[]).await?;
        parse_leagues(&body)
    }

    /// Ranked table for a league and season
    pub async fn standings(&self, league_id: u32, season: i32) -> Result<Vec<Standing>> {
        let url = format!("{}/leagues/{}/standings", self.base_url, league_id);
        let season = season.to_string();
        let body = self
            .get(Operation::Standings, &url, &[("season", season.as_str())])
            .await?;
        parse_standings(&body)
    }

    pub async fn standings_default_season(&self, league_id: u32) -> Result<Vec<Standing>> {
        self.standings(league_id, DEFAULT_SEASON).await
    }

    /// Seasons available for a league
    pub async fn seasons(&self, league_id: u32) -> Result<Vec<Season>> {
        let url = format!("{}/leagues/{}/seasons", self.base_url, league_id);
        let body = self.get(Operation::Seasons, &url, &[]).await?;
        parse_seasons(&body)
    }

    async fn get(&self, operation: Operation, url: &str, query: &[(&str, &str)]) -> Result<String> {
        debug!("GET {} ({})", url, operation);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!("Error fetching {}: {}", operation, e);
                ApiError::fetch_failed(operation, e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Error fetching {}: status {}", operation, status);
            return Err(ApiError::fetch_failed(
                operation,
                format!("Status {}: {}", status, body),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::fetch_failed(operation, e))
    }
}

fn unwrap_payload<T: DeserializeOwned>(operation: Operation, body: &str) -> Result<T> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| {
            warn!("Unexpected {} payload: {}", operation, e);
            ApiError::fetch_failed(operation, e)
        })
}

/// Parse a `/leagues` response body
pub fn parse_leagues(body: &str) -> Result<Vec<League>> {
    unwrap_payload(Operation::Leagues, body)
}

/// Parse a `/leagues/{id}/standings` response body
pub fn parse_standings(body: &str) -> Result<Vec<Standing>> {
    unwrap_payload::<StandingsData>(Operation::Standings, body).map(|data| data.standings)
}

/// Parse a `/leagues/{id}/seasons` response body
pub fn parse_seasons(body: &str) -> Result<Vec<Season>> {
    unwrap_payload::<SeasonsData>(Operation::Seasons, body).map(|data| data.seasons)
}
