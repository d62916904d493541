use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use leaguedesk_api::DEFAULT_SEASON;

/// Page locations. Rendered as URL-style paths so a pending redirect can be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Categories,
    Standings { league_id: u32, season: i32 },
    Seasons { league_id: u32 },
    Team { team_id: u32, league_id: u32, season: i32 },
    Favorites,
    Login,
}

impl Route {
    /// Only the login page is reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Categories => write!(f, "/categories"),
            Route::Standings { league_id, season } => {
                write!(f, "/standings/{}?season={}", league_id, season)
            }
            Route::Seasons { league_id } => write!(f, "/standings/{}/seasons", league_id),
            Route::Team {
                team_id,
                league_id,
                season,
            } => write!(f, "/team/{}?league={}&season={}", team_id, league_id, season),
            Route::Favorites => write!(f, "/favorites"),
            Route::Login => write!(f, "/login"),
        }
    }
}

fn parse_id<T: FromStr>(raw: &str, what: &str) -> crate::Result<T> {
    raw.parse()
        .map_err(|_| crate::Error::InvalidInput(format!("invalid {}: {}", what, raw)))
}

impl FromStr for Route {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, query) = match s.trim().split_once('?') {
            Some((path, query)) => (path, query),
            None => (s.trim(), ""),
        };

        let params: HashMap<&str, &str> = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .collect();

        let season = match params.get("season") {
            Some(raw) => parse_id(raw, "season")?,
            None => DEFAULT_SEASON,
        };

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Ok(Route::Home),
            ["categories"] => Ok(Route::Categories),
            ["favorites"] => Ok(Route::Favorites),
            ["login"] => Ok(Route::Login),
            ["standings", league_id] => Ok(Route::Standings {
                league_id: parse_id(league_id, "league id")?,
                season,
            }),
            ["standings", league_id, "seasons"] => Ok(Route::Seasons {
                league_id: parse_id(league_id, "league id")?,
            }),
            ["team", team_id] => {
                let league_id = params.get("league").ok_or_else(|| {
                    crate::Error::InvalidInput(format!("team route without league: {}", s))
                })?;
                Ok(Route::Team {
                    team_id: parse_id(team_id, "team id")?,
                    league_id: parse_id(league_id, "league id")?,
                    season,
                })
            }
            _ => Err(crate::Error::InvalidInput(format!("unknown route: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_string(), "/");
        assert_eq!(
            Route::Standings {
                league_id: 39,
                season: 2022
            }
            .to_string(),
            "/standings/39?season=2022"
        );
        assert_eq!(Route::Seasons { league_id: 39 }.to_string(), "/standings/39/seasons");
        assert_eq!(
            Route::Team {
                team_id: 359,
                league_id: 39,
                season: 2023
            }
            .to_string(),
            "/team/359?league=39&season=2023"
        );
    }

    #[test]
    fn test_parse_routes() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home);
        assert_eq!("/favorites".parse::<Route>().unwrap(), Route::Favorites);
        assert_eq!(
            "/standings/140".parse::<Route>().unwrap(),
            Route::Standings {
                league_id: 140,
                season: 2023
            }
        );
        assert_eq!(
            "/standings/140/seasons".parse::<Route>().unwrap(),
            Route::Seasons { league_id: 140 }
        );
        assert_eq!(
            "/team/86?season=2021&league=140".parse::<Route>().unwrap(),
            Route::Team {
                team_id: 86,
                league_id: 140,
                season: 2021
            }
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("/nowhere".parse::<Route>().is_err());
        assert!("/standings/abc".parse::<Route>().is_err());
        assert!("/standings/39/fixtures".parse::<Route>().is_err());
        assert!("/team/86".parse::<Route>().is_err());
        assert!("/standings/1?season=soon".parse::<Route>().is_err());
    }

    #[test]
    fn test_only_login_is_public() {
        assert!(Route::Login.is_public());
        assert!(!Route::Home.is_public());
        assert!(!Route::Favorites.is_public());
    }
}
