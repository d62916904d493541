// Table derivation: ranks, stat lookups, favorite snapshots

use chrono::Utc;
use leaguedesk_api::{Stat, Standing};
use serde::Serialize;

use crate::favorites::FavoriteTeam;

/// Value of the stat with this abbreviation, 0 when the row doesn't carry it
pub fn stat_value(stats: &[Stat], abbreviation: &str) -> f64 {
    stats
        .iter()
        .find(|stat| stat.abbreviation == abbreviation)
        .map(|stat| stat.value)
        .unwrap_or(0.0)
}

/// First non-zero value among alias abbreviations
fn aliased(stats: &[Stat], aliases: &[&str]) -> i32 {
    aliases
        .iter()
        .map(|abbr| stat_value(stats, abbr))
        .find(|value| *value != 0.0)
        .unwrap_or(0.0)
        .round() as i32
}

/// The numbers a table row shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamStats {
    pub played: i32,
    pub won: i32,
    pub drawn: i32,
    pub lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
}

impl TeamStats {
    pub fn from_stats(stats: &[Stat]) -> Self {
        Self {
            played: aliased(stats, &["GP"]),
            won: aliased(stats, &["W"]),
            // Draws are reported as ties in some competitions
            drawn: aliased(stats, &["D", "T"]),
            lost: aliased(stats, &["L"]),
            goals_for: aliased(stats, &["GF", "F"]),
            goals_against: aliased(stats, &["GA", "A"]),
            goal_difference: aliased(stats, &["GD"]),
            points: aliased(stats, &["PTS", "P"]),
        }
    }

    /// Share of games won, as a whole percentage
    pub fn win_rate(&self) -> i32 {
        if self.played <= 0 {
            return 0;
        }
        ((self.won as f64 / self.played as f64) * 100.0).round() as i32
    }
}

/// A standing paired with its rank in the unfiltered table
#[derive(Debug, Clone, PartialEq)]
pub struct StandingRow {
    pub position: u32,
    pub standing: Standing,
}

impl StandingRow {
    pub fn team_id(&self) -> String {
        self.standing.team.id.to_string()
    }

    pub fn stats(&self) -> TeamStats {
        TeamStats::from_stats(&self.standing.stats)
    }

    /// Freeze this row into a favorite record for `league_name`
    pub fn snapshot(&self, league_name: &str) -> FavoriteTeam {
        let stats = self.stats();
        let team = &self.standing.team;

        FavoriteTeam {
            id: self.team_id(),
            name: team.name.clone(),
            logo: team.logo.clone(),
            league: league_name.to_string(),
            position: self.position as i32,
            points: stats.points,
            played: stats.played,
            won: stats.won,
            drawn: stats.drawn,
            lost: stats.lost,
            goals_for: stats.goals_for,
            goals_against: stats.goals_against,
            goal_difference: stats.goal_difference,
            date_added: Utc::now(),
        }
    }
}

/// Attach ranks to the API's ordered table (position = index + 1)
pub fn rank(standings: Vec<Standing>) -> Vec<StandingRow> {
    standings
        .into_iter()
        .enumerate()
        .map(|(index, standing)| StandingRow {
            position: index as u32 + 1,
            standing,
        })
        .collect()
}

/// Badge shown on the team detail view
pub fn detail_badge(position: i32) -> &'static str {
    if position <= 4 {
        "Champions League"
    } else if position <= 6 {
        "Europa League"
    } else if position >= 18 {
        "Relegation Zone"
    } else {
        "Mid Table"
    }
}

/// Badge shown on the favorites list
pub fn favorites_badge(position: i32) -> &'static str {
    if position <= 4 {
        "Top 4"
    } else if position <= 10 {
        "Top Half"
    } else if position >= 18 {
        "Bottom 3"
    } else {
        "Mid Table"
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use leaguedesk_api::Team;

    pub(crate) fn stat(abbreviation: &str, value: f64) -> Stat {
        Stat {
            name: String::new(),
            display_name: String::new(),
            short_display_name: String::new(),
            description: String::new(),
            abbreviation: abbreviation.to_string(),
            kind: String::new(),
            value,
            display_value: value.to_string(),
        }
    }

    pub(crate) fn standing(id: u32, name: &str, short: &str, points: f64) -> Standing {
        Standing {
            team: Team {
                id,
                name: name.to_string(),
                slug: name.to_lowercase().replace(' ', "-"),
                short_display_name: short.to_string(),
                logo: format!("https://a/{}.png", id),
            },
            stats: vec![
                stat("GP", 38.0),
                stat("W", 26.0),
                stat("D", 6.0),
                stat("L", 6.0),
                stat("F", 88.0),
                stat("A", 43.0),
                stat("GD", 45.0),
                stat("P", points),
            ],
        }
    }

    #[test]
    fn test_missing_stat_defaults_to_zero() {
        let stats = vec![stat("GP", 10.0)];
        assert_eq!(stat_value(&stats, "GP"), 10.0);
        assert_eq!(stat_value(&stats, "W"), 0.0);
        assert_eq!(TeamStats::from_stats(&[]), TeamStats::default());
    }

    #[test]
    fn test_draws_alias_ties() {
        let with_ties = vec![stat("GP", 34.0), stat("T", 9.0)];
        assert_eq!(TeamStats::from_stats(&with_ties).drawn, 9);

        let with_both = vec![stat("D", 4.0), stat("T", 9.0)];
        assert_eq!(TeamStats::from_stats(&with_both).drawn, 4);
    }

    #[test]
    fn test_goal_and_point_aliases() {
        let ui_style = vec![stat("GF", 70.0), stat("GA", 30.0), stat("PTS", 80.0)];
        let api_style = vec![stat("F", 70.0), stat("A", 30.0), stat("P", 80.0)];
        assert_eq!(TeamStats::from_stats(&ui_style), TeamStats::from_stats(&api_style));
        assert_eq!(TeamStats::from_stats(&api_style).points, 80);
    }

    #[test]
    fn test_rank_is_index_plus_one() {
        let rows = rank(vec![
            standing(1, "Arsenal", "Arsenal", 89.0),
            standing(2, "Chelsea", "Chelsea", 70.0),
        ]);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[1].position, 2);
        assert_eq!(rows[1].team_id(), "2");
    }

    #[test]
    fn test_snapshot_copies_row() {
        let rows = rank(vec![
            standing(1, "Arsenal", "Arsenal", 89.0),
            standing(86, "Real Madrid", "Madrid", 95.0),
        ]);
        let fav = rows[1].snapshot("Spanish La Liga");

        assert_eq!(fav.id, "86");
        assert_eq!(fav.league, "Spanish La Liga");
        assert_eq!(fav.position, 2);
        assert_eq!(fav.points, 95);
        assert_eq!(fav.goals_for, 88);
        assert_eq!(fav.goal_difference, 45);
    }

    #[test]
    fn test_win_rate() {
        let stats = TeamStats {
            played: 20,
            won: 12,
            ..Default::default()
        };
        assert_eq!(stats.win_rate(), 60);
        assert_eq!(TeamStats::default().win_rate(), 0);
    }

    #[test]
    fn test_badges() {
        assert_eq!(detail_badge(1), "Champions League");
        assert_eq!(detail_badge(4), "Champions League");
        assert_eq!(detail_badge(5), "Europa League");
        assert_eq!(detail_badge(6), "Europa League");
        assert_eq!(detail_badge(12), "Mid Table");
        assert_eq!(detail_badge(19), "Relegation Zone");

        assert_eq!(favorites_badge(2), "Top 4");
        assert_eq!(favorites_badge(4), "Top 4");
        assert_eq!(favorites_badge(5), "Top Half");
        assert_eq!(favorites_badge(10), "Top Half");
        assert_eq!(favorites_badge(14), "Mid Table");
        assert_eq!(favorites_badge(18), "Bottom 3");
    }
}
