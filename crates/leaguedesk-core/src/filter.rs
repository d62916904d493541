// Text and category filters over already-fetched data
// All matching is case-insensitive substring matching; order is always preserved.

use std::fmt;
use std::str::FromStr;

use leaguedesk_api::League;

use crate::favorites::FavoriteTeam;
use crate::standings::StandingRow;

const EUROPEAN_KEYWORDS: &[&str] = &[
    "premier",
    "la liga",
    "bundesliga",
    "serie a",
    "ligue 1",
    "champions",
    "europa",
    "england",
    "spain",
    "germany",
    "italy",
    "france",
    "dutch",
    "portugal",
];

const AMERICAN_KEYWORDS: &[&str] = &[
    "mls",
    "liga mx",
    "brasil",
    "argentina",
    "copa",
    "america",
    "libertadores",
];

const INTERNATIONAL_KEYWORDS: &[&str] = &[
    "world",
    "champions",
    "euro",
    "copa",
    "nations",
    "international",
];

/// League tabs. Buckets overlap: a league lands in every category it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeagueCategory {
    #[default]
    All,
    European,
    American,
    International,
    Other,
}

impl LeagueCategory {
    /// Tab order
    pub fn all() -> [LeagueCategory; 5] {
        [
            LeagueCategory::All,
            LeagueCategory::European,
            LeagueCategory::American,
            LeagueCategory::International,
            LeagueCategory::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeagueCategory::All => "all",
            LeagueCategory::European => "european",
            LeagueCategory::American => "american",
            LeagueCategory::International => "international",
            LeagueCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeagueCategory::All => "All Leagues",
            LeagueCategory::European => "European",
            LeagueCategory::American => "American",
            LeagueCategory::International => "International",
            LeagueCategory::Other => "Other",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            LeagueCategory::European => EUROPEAN_KEYWORDS,
            LeagueCategory::American => AMERICAN_KEYWORDS,
            LeagueCategory::International => INTERNATIONAL_KEYWORDS,
            LeagueCategory::All | LeagueCategory::Other => &[],
        }
    }

    pub fn matches(&self, league: &League) -> bool {
        let name = league.name.to_lowercase();
        let hits = |category: LeagueCategory| {
            category
                .keywords()
                .iter()
                .any(|keyword| name.contains(keyword))
        };

        match self {
            LeagueCategory::All => true,
            // Everything no regional bucket claims
            LeagueCategory::Other => !(hits(LeagueCategory::European)
                || hits(LeagueCategory::American)
                || hits(LeagueCategory::International)),
            category => hits(*category),
        }
    }
}

impl fmt::Display for LeagueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeagueCategory {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeagueCategory::all()
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::Error::InvalidInput(format!("unknown category: {}", s)))
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Leagues whose name or abbreviation contains `term`
pub fn filter_leagues<'a>(leagues: &'a [League], term: &str) -> Vec<&'a League> {
    let term = term.to_lowercase();
    leagues
        .iter()
        .filter(|league| contains_ci(&league.name, &term) || contains_ci(&league.abbr, &term))
        .collect()
}

/// Restrict to a category, then apply the text filter
pub fn filter_by_category<'a>(
    leagues: &'a [League],
    category: LeagueCategory,
    term: &str,
) -> Vec<&'a League> {
    let term = term.to_lowercase();
    leagues
        .iter()
        .filter(|league| category.matches(league))
        .filter(|league| contains_ci(&league.name, &term) || contains_ci(&league.abbr, &term))
        .collect()
}

/// Per-tab league counts, ignoring any search term
pub fn category_counts(leagues: &[League]) -> Vec<(LeagueCategory, usize)> {
    LeagueCategory::all()
        .into_iter()
        .map(|category| {
            let count = leagues.iter().filter(|league| category.matches(league)).count();
            (category, count)
        })
        .collect()
}

/// Table rows whose team name or short name contains `term`.
///
/// Rows keep the position they had in the full table.
pub fn filter_standings<'a>(rows: &'a [StandingRow], term: &str) -> Vec<&'a StandingRow> {
    let term = term.to_lowercase();
    rows.iter()
        .filter(|row| {
            let team = &row.standing.team;
            contains_ci(&team.name, &term) || contains_ci(&team.short_display_name, &term)
        })
        .collect()
}

/// Favorites whose team name or league contains `term`
pub fn filter_favorites<'a>(favorites: &'a [FavoriteTeam], term: &str) -> Vec<&'a FavoriteTeam> {
    let term = term.to_lowercase();
    favorites
        .iter()
        .filter(|team| contains_ci(&team.name, &term) || contains_ci(&team.league, &term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::rank;
    use crate::standings::tests::standing;
    use leaguedesk_api::Logos;

    fn league(id: u32, name: &str, abbr: &str) -> League {
        League {
            id,
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            abbr: abbr.to_string(),
            logos: Logos::default(),
        }
    }

    fn sample_leagues() -> Vec<League> {
        vec![
            league(1, "English Premier League", "Prem"),
            league(2, "Spanish La Liga", "LALIGA"),
            league(3, "Liga MX", "MX"),
            league(4, "UEFA Champions League", "UCL"),
            league(5, "Australian A-League", "ALM"),
            league(6, "FIFA World Cup", "WC"),
        ]
    }

    fn names(leagues: &[&League]) -> Vec<String> {
        leagues.iter().map(|l| l.name.clone()).collect()
    }

    #[test]
    fn test_filter_leagues_by_name_or_abbr() {
        let leagues = sample_leagues();
        assert_eq!(names(&filter_leagues(&leagues, "LIGA")), vec!["Spanish La Liga", "Liga MX"]);
        assert_eq!(names(&filter_leagues(&leagues, "ucl")), vec!["UEFA Champions League"]);
        assert_eq!(filter_leagues(&leagues, "").len(), leagues.len());
        assert!(filter_leagues(&leagues, "cricket").is_empty());
    }

    #[test]
    fn test_category_membership() {
        let leagues = sample_leagues();

        let european = names(&filter_by_category(&leagues, LeagueCategory::European, ""));
        assert!(european.contains(&"Spanish La Liga".to_string()));
        assert!(european.contains(&"UEFA Champions League".to_string()));

        let american = names(&filter_by_category(&leagues, LeagueCategory::American, ""));
        assert_eq!(american, vec!["Liga MX"]);

        let international = names(&filter_by_category(&leagues, LeagueCategory::International, ""));
        assert_eq!(international, vec!["UEFA Champions League", "FIFA World Cup"]);
    }

    #[test]
    fn test_other_is_complement_of_regional_buckets() {
        let leagues = sample_leagues();
        let other = names(&filter_by_category(&leagues, LeagueCategory::Other, ""));
        assert_eq!(other, vec!["Australian A-League"]);

        for l in &leagues {
            let regional = [
                LeagueCategory::European,
                LeagueCategory::American,
                LeagueCategory::International,
            ]
            .iter()
            .any(|c| c.matches(l));
            assert_ne!(regional, LeagueCategory::Other.matches(l), "{}", l.name);
        }
    }

    #[test]
    fn test_category_then_text() {
        let leagues = sample_leagues();
        let hits = filter_by_category(&leagues, LeagueCategory::European, "league");
        assert_eq!(names(&hits), vec!["English Premier League", "UEFA Champions League"]);
    }

    #[test]
    fn test_category_counts_fan_out() {
        let counts = category_counts(&sample_leagues());
        assert_eq!(
            counts,
            vec![
                (LeagueCategory::All, 6),
                (LeagueCategory::European, 3),
                (LeagueCategory::American, 1),
                (LeagueCategory::International, 2),
                (LeagueCategory::Other, 1),
            ]
        );
    }

    #[test]
    fn test_category_parse_and_display() {
        assert_eq!("European".parse::<LeagueCategory>().unwrap(), LeagueCategory::European);
        assert_eq!(LeagueCategory::Other.to_string(), "other");
        assert!("asian".parse::<LeagueCategory>().is_err());
    }

    #[test]
    fn test_filter_standings() {
        let rows = rank(vec![
            standing(1, "Arsenal", "Arsenal", 89.0),
            standing(2, "Chelsea", "Chelsea", 70.0),
            standing(3, "Real Madrid", "Madrid", 95.0),
        ]);

        let hits = filter_standings(&rows, "real");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].standing.team.name, "Real Madrid");
        // Rank is the full-table rank, not the index in the filtered view
        assert_eq!(hits[0].position, 3);

        let all: Vec<_> = filter_standings(&rows, "")
            .iter()
            .map(|r| r.standing.team.name.as_str())
            .collect();
        assert_eq!(all, vec!["Arsenal", "Chelsea", "Real Madrid"]);

        // Short display name matches too
        assert_eq!(filter_standings(&rows, "MADRID").len(), 1);
    }

    #[test]
    fn test_filter_favorites_by_name_or_league() {
        use crate::favorites::tests::team;

        let mut madrid = team("86", "Real Madrid");
        madrid.league = "Spanish La Liga".to_string();
        let favorites = vec![team("359", "Arsenal"), madrid];

        assert_eq!(filter_favorites(&favorites, "la liga").len(), 1);
        assert_eq!(filter_favorites(&favorites, "premier")[0].name, "Arsenal");
        assert_eq!(filter_favorites(&favorites, "").len(), 2);
    }
}
