use std::sync::Arc;

use chrono::{DateTime, Utc};
use leaguedesk_storage::Storage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Storage key holding the whole ledger as one JSON array
pub const FAVORITES_KEY: &str = "football-favorites";

/// A saved team.
///
/// This is a snapshot of the team's table row at the time it was saved. The
/// numbers never follow the live standings; only an explicit edit changes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteTeam {
    /// Source team id, stringified
    pub id: String,
    pub name: String,
    pub logo: String,
    /// League display name, free text
    pub league: String,
    pub position: i32,
    pub points: i32,
    pub played: i32,
    pub won: i32,
    pub drawn: i32,
    pub lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub date_added: DateTime<Utc>,
}

/// Partial update for a favorite. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritePatch {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub league: Option<String>,
    pub position: Option<i32>,
    pub points: Option<i32>,
    pub played: Option<i32>,
    pub won: Option<i32>,
    pub drawn: Option<i32>,
    pub lost: Option<i32>,
    pub goals_for: Option<i32>,
    pub goals_against: Option<i32>,
    pub goal_difference: Option<i32>,
}

impl FavoritePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply(self, team: &mut FavoriteTeam) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }

        set(&mut team.name, self.name);
        set(&mut team.logo, self.logo);
        set(&mut team.league, self.league);
        set(&mut team.position, self.position);
        set(&mut team.points, self.points);
        set(&mut team.played, self.played);
        set(&mut team.won, self.won);
        set(&mut team.drawn, self.drawn);
        set(&mut team.lost, self.lost);
        set(&mut team.goals_for, self.goals_for);
        set(&mut team.goals_against, self.goals_against);
        set(&mut team.goal_difference, self.goal_difference);
    }
}

/// The favorites ledger.
///
/// Holds at most one record per team id, in insertion order. Every mutation
/// writes the full ledger back to storage before returning.
pub struct FavoritesStore {
    storage: Arc<dyn Storage>,
    favorites: Vec<FavoriteTeam>,
}

impl FavoritesStore {
    /// Load the last persisted ledger. Missing or unreadable data gives an empty one.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let favorites = match storage.get_item(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<FavoriteTeam>>(&raw) {
                Ok(favorites) => favorites,
                Err(e) => {
                    warn!("Ignoring unparsable favorites ledger: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read favorites ledger: {}", e);
                Vec::new()
            }
        };

        debug!("Loaded {} favorites", favorites.len());
        Self { storage, favorites }
    }

    pub fn list(&self) -> &[FavoriteTeam] {
        &self.favorites
    }

    pub fn get(&self, id: &str) -> Option<&FavoriteTeam> {
        self.favorites.iter().find(|team| team.id == id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Save a team, stamping `date_added` with the current time.
    ///
    /// A record with the same id is replaced in place rather than duplicated.
    pub fn add(&mut self, mut team: FavoriteTeam) -> crate::Result<()> {
        team.date_added = Utc::now();

        let mut next = self.favorites.clone();
        match next.iter_mut().find(|existing| existing.id == team.id) {
            Some(existing) => {
                debug!("Replacing favorite {}", team.id);
                *existing = team;
            }
            None => {
                info!("Adding {} to favorites", team.name);
                next.push(team);
            }
        }

        self.commit(next)
    }

    /// Drop every record with this id. No-op when absent.
    pub fn remove(&mut self, id: &str) -> crate::Result<()> {
        let next: Vec<FavoriteTeam> = self
            .favorites
            .iter()
            .filter(|team| team.id != id)
            .cloned()
            .collect();

        if next.len() != self.favorites.len() {
            info!("Removing {} from favorites", id);
        }

        self.commit(next)
    }

    /// Merge `patch` into the record with this id. Returns whether one matched.
    pub fn update(&mut self, id: &str, patch: FavoritePatch) -> crate::Result<bool> {
        let mut next = self.favorites.clone();
        let Some(team) = next.iter_mut().find(|team| team.id == id) else {
            debug!("No favorite {} to update", id);
            return Ok(false);
        };

        patch.apply(team);
        self.commit(next)?;
        Ok(true)
    }

    pub fn clear(&mut self) -> crate::Result<()> {
        self.commit(Vec::new())
    }

    /// Write `next` to storage, then adopt it. A failed write leaves the ledger as it was.
    fn commit(&mut self, next: Vec<FavoriteTeam>) -> crate::Result<()> {
        let json = serde_json::to_string(&next)?;
        self.storage.set_item(FAVORITES_KEY, &json)?;
        self.favorites = next;
        Ok(())
    }
}
