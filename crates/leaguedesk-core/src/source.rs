// Bridges the HTTP client with the pages - lets tests swap in a mock
use async_trait::async_trait;
use leaguedesk_api::{FootballClient, League, Season, Standing};

use crate::Result;

/// Where pages get league data from
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FootballSource: Send + Sync {
    async fn leagues(&self) -> Result<Vec<League>>;
    async fn standings(&self, league_id: u32, season: i32) -> Result<Vec<Standing>>;
    async fn seasons(&self, league_id: u32) -> Result<Vec<Season>>;
}

#[async_trait]
impl FootballSource for FootballClient {
    async fn leagues(&self) -> Result<Vec<League>> {
        Ok(FootballClient::leagues(self).await?)
    }

    async fn standings(&self, league_id: u32, season: i32) -> Result<Vec<Standing>> {
        Ok(FootballClient::standings(self, league_id, season).await?)
    }

    async fn seasons(&self, league_id: u32) -> Result<Vec<Season>> {
        Ok(FootballClient::seasons(self, league_id).await?)
    }
}
