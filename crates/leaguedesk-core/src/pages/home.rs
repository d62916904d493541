use leaguedesk_api::League;
use tracing::warn;

use crate::filter::filter_leagues;
use crate::notify::Toast;
use crate::source::FootballSource;

/// League directory with a search box
#[derive(Debug, Default)]
pub struct HomePage {
    leagues: Vec<League>,
    search: String,
}

impl HomePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the league list. Returns a toast on failure.
    pub async fn load(&mut self, source: &dyn FootballSource) -> Option<Toast> {
        match source.leagues().await {
            Ok(leagues) => {
                self.leagues = leagues;
                None
            }
            Err(e) => {
                warn!("Loading leagues failed: {}", e);
                Some(Toast::error(
                    "Error loading leagues",
                    "Failed to fetch leagues. Please try again.",
                ))
            }
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn leagues(&self) -> &[League] {
        &self.leagues
    }

    pub fn visible(&self) -> Vec<&League> {
        filter_leagues(&self.leagues, &self.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fixtures;
    use crate::source::MockFootballSource;
    use leaguedesk_api::Operation;

    #[tokio::test]
    async fn test_load_and_search() {
        let mut source = MockFootballSource::new();
        source
            .expect_leagues()
            .times(1)
            .returning(|| Ok(fixtures::leagues()));

        let mut page = HomePage::new();
        assert!(page.load(&source).await.is_none());
        assert_eq!(page.visible().len(), 4);

        page.set_search("liga");
        let names: Vec<_> = page.visible().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Spanish La Liga", "Liga MX"]);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_leagues() {
        let mut source = MockFootballSource::new();
        let mut calls = 0;
        source.expect_leagues().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(fixtures::leagues())
            } else {
                Err(fixtures::fetch_error(Operation::Leagues))
            }
        });

        let mut page = HomePage::new();
        page.load(&source).await;

        let toast = page.load(&source).await.expect("error toast");
        assert!(toast.is_error());
        assert_eq!(toast.title, "Error loading leagues");
        assert_eq!(page.leagues().len(), 4);
    }
}
