use leaguedesk_api::League;
use tracing::warn;

use crate::filter::{category_counts, filter_by_category, LeagueCategory};
use crate::notify::Toast;
use crate::source::FootballSource;

/// Leagues grouped into regional tabs
#[derive(Debug, Default)]
pub struct CategoriesPage {
    leagues: Vec<League>,
    category: LeagueCategory,
    search: String,
}

impl CategoriesPage {
    pub fn new(category: LeagueCategory) -> Self {
        Self {
            category,
            ..Default::default()
        }
    }

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

    pub fn category(&self) -> LeagueCategory {
        self.category
    }

    pub fn set_category(&mut self, category: LeagueCategory) {
        self.category = category;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Leagues in the active tab matching the search
    pub fn visible(&self) -> Vec<&League> {
        filter_by_category(&self.leagues, self.category, &self.search)
    }

    /// Tab badges
    pub fn counts(&self) -> Vec<(LeagueCategory, usize)> {
        category_counts(&self.leagues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fixtures;
    use crate::source::MockFootballSource;

    #[tokio::test]
    async fn test_tabs_fan_out() {
        let mut source = MockFootballSource::new();
        source.expect_leagues().returning(|| Ok(fixtures::leagues()));

        let mut page = CategoriesPage::new(LeagueCategory::European);
        assert!(page.load(&source).await.is_none());

        let european: Vec<_> = page.visible().iter().map(|l| l.id).collect();
        assert_eq!(european, vec![39, 140, 2]);

        page.set_category(LeagueCategory::International);
        let international: Vec<_> = page.visible().iter().map(|l| l.id).collect();
        assert_eq!(international, vec![2]);

        page.set_category(LeagueCategory::American);
        page.set_search("mx");
        assert_eq!(page.visible()[0].name, "Liga MX");

        let counts = page.counts();
        assert_eq!(counts[0], (LeagueCategory::All, 4));
        assert_eq!(counts[4], (LeagueCategory::Other, 0));
    }
}
