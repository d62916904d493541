use leaguedesk_api::Season;
use tracing::{info, warn};

use super::{league_name, UNKNOWN_LEAGUE};
use crate::favorites::FavoritesStore;
use crate::filter::filter_standings;
use crate::notify::Toast;
use crate::source::FootballSource;
use crate::standings::{rank, StandingRow};

/// One league's table for one season
#[derive(Debug)]
pub struct StandingsPage {
    league_id: u32,
    season: i32,
    league_name: Option<String>,
    rows: Vec<StandingRow>,
    seasons: Vec<Season>,
    search: String,
}

impl StandingsPage {
    pub fn new(league_id: u32, season: i32) -> Self {
        Self {
            league_id,
            season,
            league_name: None,
            rows: Vec::new(),
            seasons: Vec::new(),
            search: String::new(),
        }
    }

    /// Fetch the table and the league list together
    pub async fn load(&mut self, source: &dyn FootballSource) -> Option<Toast> {
        let joined = futures::try_join!(
            source.standings(self.league_id, self.season),
            source.leagues()
        );

        match joined {
            Ok((standings, leagues)) => {
                info!(
                    "Loaded {} rows for league {} season {}",
                    standings.len(),
                    self.league_id,
                    self.season
                );
                self.rows = rank(standings);
                self.league_name = league_name(&leagues, self.league_id);
                None
            }
            Err(e) => {
                warn!("Loading standings failed: {}", e);
                Some(Toast::error(
                    "Error loading standings",
                    "Failed to fetch standings. Please try again.",
                ))
            }
        }
    }

    /// Fetch the seasons this league has tables for
    pub async fn load_seasons(&mut self, source: &dyn FootballSource) -> Option<Toast> {
        match source.seasons(self.league_id).await {
            Ok(seasons) => {
                self.seasons = seasons;
                None
            }
            Err(e) => {
                warn!("Loading seasons failed: {}", e);
                Some(Toast::error(
                    "Error loading seasons",
                    "Failed to fetch seasons. Please try again.",
                ))
            }
        }
    }

    pub fn season(&self) -> i32 {
        self.season
    }

    /// Switch seasons; takes effect on the next `load`
    pub fn set_season(&mut self, season: i32) {
        self.season = season;
    }

    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    pub fn league_name(&self) -> &str {
        self.league_name.as_deref().unwrap_or(UNKNOWN_LEAGUE)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn rows(&self) -> &[StandingRow] {
        &self.rows
    }

    pub fn visible(&self) -> Vec<&StandingRow> {
        filter_standings(&self.rows, &self.search)
    }

    /// Save a team from this table.
    ///
    /// The stored position is the team's rank in the full table, whatever the
    /// current search shows.
    pub fn add_favorite(&self, team_id: u32, store: &mut FavoritesStore) -> crate::Result<Toast> {
        let Some(row) = self.rows.iter().find(|row| row.standing.team.id == team_id) else {
            return Ok(Toast::error(
                "Team not found",
                format!("Team {} is not in this table.", team_id),
            ));
        };

        let name = &row.standing.team.name;
        if store.is_favorite(&row.team_id()) {
            return Ok(Toast::error(
                "Already in favorites",
                format!("{} is already in your favorites!", name),
            ));
        }

        store.add(row.snapshot(self.league_name()))?;
        Ok(Toast::info(
            "Added to favorites!",
            format!("{} has been added to your favorites.", name),
        ))
    }
}
