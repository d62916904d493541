use tracing::warn;

use super::{league_name, UNKNOWN_LEAGUE};
use crate::favorites::FavoritesStore;
use crate::notify::Toast;
use crate::source::FootballSource;
use crate::standings::{detail_badge, rank, StandingRow, TeamStats};

/// A single team's line in a league table, with a favorite toggle
#[derive(Debug)]
pub struct TeamDetailPage {
    team_id: u32,
    league_id: u32,
    season: i32,
    league_name: Option<String>,
    row: Option<StandingRow>,
}

impl TeamDetailPage {
    pub fn new(team_id: u32, league_id: u32, season: i32) -> Self {
        Self {
            team_id,
            league_id,
            season,
            league_name: None,
            row: None,
        }
    }

    pub async fn load(&mut self, source: &dyn FootballSource) -> Option<Toast> {
        let joined = futures::try_join!(
            source.standings(self.league_id, self.season),
            source.leagues()
        );

        let (standings, leagues) = match joined {
            Ok(data) => data,
            Err(e) => {
                warn!("Loading team {} failed: {}", self.team_id, e);
                return Some(Toast::error(
                    "Error loading team",
                    "Failed to fetch team details. Please try again.",
                ));
            }
        };

        self.league_name = league_name(&leagues, self.league_id);

        let team_id = self.team_id;
        let row = rank(standings)
            .into_iter()
            .find(|row| row.standing.team.id == team_id);

        match row {
            Some(row) => {
                self.row = Some(row);
                None
            }
            None => Some(Toast::error(
                "Team not found",
                format!(
                    "Team {} is not in the {} {} table.",
                    self.team_id,
                    self.league_name(),
                    self.season
                ),
            )),
        }
    }

    pub fn team_id(&self) -> String {
        self.team_id.to_string()
    }

    pub fn season(&self) -> i32 {
        self.season
    }

    pub fn league_name(&self) -> &str {
        self.league_name.as_deref().unwrap_or(UNKNOWN_LEAGUE)
    }

    pub fn row(&self) -> Option<&StandingRow> {
        self.row.as_ref()
    }

    pub fn stats(&self) -> Option<TeamStats> {
        self.row.as_ref().map(StandingRow::stats)
    }

    pub fn badge(&self) -> Option<&'static str> {
        self.row
            .as_ref()
            .map(|row| detail_badge(row.position as i32))
    }

    pub fn is_favorite(&self, store: &FavoritesStore) -> bool {
        store.is_favorite(&self.team_id())
    }

    /// Add the team if it isn't saved yet, remove it if it is
    pub fn toggle_favorite(&self, store: &mut FavoritesStore) -> crate::Result<Toast> {
        let Some(row) = &self.row else {
            return Ok(Toast::error(
                "Team not loaded",
                "Load the team before changing favorites.",
            ));
        };

        let name = &row.standing.team.name;
        if self.is_favorite(store) {
            store.remove(&self.team_id())?;
            Ok(Toast::info(
                "Removed from favorites",
                format!("{} has been removed from your favorites.", name),
            ))
        } else {
            store.add(row.snapshot(self.league_name()))?;
            Ok(Toast::info(
                "Added to favorites",
                format!("{} has been added to your favorites.", name),
            ))
        }
    }
}
