// Page view-models: page-local state, loaded through a FootballSource
//
// A failed load turns into a destructive toast and leaves the previous state alone.

pub mod categories;
pub mod favorites;
pub mod home;
pub mod standings;
pub mod team;

pub use categories::CategoriesPage;
pub use favorites::FavoritesPage;
pub use home::HomePage;
pub use standings::StandingsPage;
pub use team::TeamDetailPage;

use leaguedesk_api::League;

/// Display name for a league id, if the list has it
fn league_name(leagues: &[League], league_id: u32) -> Option<String> {
    leagues
        .iter()
        .find(|league| league.id == league_id)
        .map(|league| league.name.clone())
}

pub const UNKNOWN_LEAGUE: &str = "Unknown League";

#[cfg(test)]
pub(crate) mod fixtures {
    use leaguedesk_api::{League, Logos, Standing};

    use crate::standings::tests::standing;

    pub fn league(id: u32, name: &str, abbr: &str) -> League {
        League {
            id,
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            abbr: abbr.to_string(),
            logos: Logos::default(),
        }
    }

    pub fn leagues() -> Vec<League> {
        vec![
            league(39, "English Premier League", "Prem"),
            league(140, "Spanish La Liga", "LALIGA"),
            league(262, "Liga MX", "MX"),
            league(2, "UEFA Champions League", "UCL"),
        ]
    }

    pub fn table() -> Vec<Standing> {
        vec![
            standing(359, "Arsenal", "Arsenal", 89.0),
            standing(363, "Chelsea", "Chelsea", 70.0),
            standing(86, "Real Madrid", "Madrid", 95.0),
        ]
    }

    pub fn fetch_error(operation: leaguedesk_api::Operation) -> crate::Error {
        crate::Error::Api(leaguedesk_api::ApiError::FetchFailed {
            operation,
            reason: "connection refused".to_string(),
        })
    }
}
