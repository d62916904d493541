use crate::favorites::{FavoritePatch, FavoriteTeam, FavoritesStore};
use crate::filter::filter_favorites;
use crate::notify::Toast;

/// Saved teams with search, edit and delete
#[derive(Debug, Default)]
pub struct FavoritesPage {
    search: String,
}

impl FavoritesPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn visible<'a>(&self, store: &'a FavoritesStore) -> Vec<&'a FavoriteTeam> {
        filter_favorites(store.list(), &self.search)
    }

    /// "3 teams", "1 team"
    pub fn summary(store: &FavoritesStore) -> String {
        let count = store.len();
        format!("{} team{}", count, if count == 1 { "" } else { "s" })
    }

    pub fn edit(
        &self,
        store: &mut FavoritesStore,
        id: &str,
        patch: FavoritePatch,
    ) -> crate::Result<Toast> {
        if patch.is_empty() {
            return Ok(Toast::info("Nothing to update", "No fields were changed."));
        }

        if !store.update(id, patch)? {
            return Ok(not_found(id));
        }

        let name = store.get(id).map(|t| t.name.clone()).unwrap_or_default();
        Ok(Toast::info(
            "Team updated",
            format!("{} has been updated successfully.", name),
        ))
    }

    pub fn delete(&self, store: &mut FavoritesStore, id: &str) -> crate::Result<Toast> {
        let Some(name) = store.get(id).map(|t| t.name.clone()) else {
            return Ok(not_found(id));
        };

        store.remove(id)?;
        Ok(Toast::info(
            "Team removed",
            format!("{} has been removed from your favorites.", name),
        ))
    }
}

fn not_found(id: &str) -> Toast {
    Toast::error("Team not found", format!("No favorite team with id {}.", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::tests::team;
    use leaguedesk_storage::MemoryStorage;
    use std::sync::Arc;

    fn store() -> FavoritesStore {
        let mut store = FavoritesStore::load(Arc::new(MemoryStorage::new()));
        store.add(team("359", "Arsenal")).unwrap();
        let mut madrid = team("86", "Real Madrid");
        madrid.league = "Spanish La Liga".to_string();
        store.add(madrid).unwrap();
        store
    }

    #[test]
    fn test_search_and_summary() {
        let store = store();
        let mut page = FavoritesPage::new();
        assert_eq!(page.visible(&store).len(), 2);
        assert_eq!(FavoritesPage::summary(&store), "2 teams");

        page.set_search("liga");
        assert_eq!(page.visible(&store)[0].name, "Real Madrid");
    }

    #[test]
    fn test_edit_reports_new_name() {
        let mut store = store();
        let page = FavoritesPage::new();

        let patch = FavoritePatch {
            name: Some("Los Blancos".to_string()),
            won: Some(30),
            ..Default::default()
        };
        let toast = page.edit(&mut store, "86", patch).unwrap();

        assert_eq!(toast.title, "Team updated");
        assert_eq!(toast.description, "Los Blancos has been updated successfully.");
        assert_eq!(store.get("86").unwrap().won, 30);
    }

    #[test]
    fn test_edit_unknown_or_empty() {
        let mut store = store();
        let page = FavoritesPage::new();

        let patch = FavoritePatch {
            points: Some(1),
            ..Default::default()
        };
        assert!(page.edit(&mut store, "1", patch).unwrap().is_error());
        assert_eq!(
            page.edit(&mut store, "86", FavoritePatch::default()).unwrap().title,
            "Nothing to update"
        );
    }

    #[test]
    fn test_delete() {
        let mut store = store();
        let page = FavoritesPage::new();

        let toast = page.delete(&mut store, "359").unwrap();
        assert_eq!(toast.description, "Arsenal has been removed from your favorites.");
        assert_eq!(FavoritesPage::summary(&store), "1 team");

        assert!(page.delete(&mut store, "359").unwrap().is_error());
    }
}
