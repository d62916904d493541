use std::sync::Arc;

use leaguedesk_api::FootballClient;
use leaguedesk_core::pages::{CategoriesPage, FavoritesPage, HomePage, StandingsPage, TeamDetailPage};
use leaguedesk_core::{
    Access, AuthGate, Config, FavoritePatch, FavoritesStore, LeagueCategory, LoginOutcome, Route,
};
use leaguedesk_storage::{SqliteStorage, Storage};
use tracing::{debug, info};

use crate::render;

/// Page-local inputs a command line can carry along with a route
#[derive(Debug, Default)]
pub struct PageOptions {
    pub search: Option<String>,
    pub category: LeagueCategory,
    pub favorite: Option<u32>,
    pub toggle_favorite: bool,
}

/// Everything a command needs, built once per run.
///
/// Each method returns `false` when the user should see a failure exit code.
pub struct App {
    client: FootballClient,
    gate: AuthGate,
    favorites: FavoritesStore,
}

impl App {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let storage_path = config.storage_path()?;
        debug!("Using storage {}", storage_path.display());

        let storage: Arc<dyn Storage> = Arc::new(SqliteStorage::open(&storage_path)?);
        let client = FootballClient::with_base_url(config.api.base_url.clone(), config.api.timeout())?;

        Ok(Self {
            client,
            gate: AuthGate::load(storage.clone()),
            favorites: FavoritesStore::load(storage),
        })
    }

    pub async fn login(&mut self, username: &str, password: &str) -> anyhow::Result<bool> {
        match self.gate.login(username, password)? {
            LoginOutcome::Rejected(message) => {
                render::error_line(&message);
                Ok(false)
            }
            LoginOutcome::Redirect(route) => {
                println!("Welcome, {}!", username);
                info!("Continuing to {}", route);
                self.visit(route, PageOptions::default()).await
            }
        }
    }

    pub fn logout(&mut self) -> anyhow::Result<bool> {
        self.gate.logout()?;
        println!("Logged out.");
        Ok(true)
    }

    pub fn whoami(&self) -> bool {
        match self.gate.session() {
            Some(session) => {
                println!("{}", session.username);
                true
            }
            None => {
                println!("Not logged in.");
                false
            }
        }
    }

    /// Gate, then render the page behind `route`
    pub async fn visit(&mut self, route: Route, options: PageOptions) -> anyhow::Result<bool> {
        if let Access::Redirect { from, .. } = self.gate.guard(route.clone())? {
            render::error_line(&format!(
                "Login required for {}. Run `leaguedesk login -u <user> -p <password>` to continue there.",
                from
            ));
            return Ok(false);
        }

        match route {
            Route::Home => self.home(options).await,
            Route::Categories => self.categories(options).await,
            Route::Standings { league_id, season } => {
                self.standings(league_id, season, options).await
            }
            Route::Seasons { league_id } => self.seasons(league_id).await,
            Route::Team {
                team_id,
                league_id,
                season,
            } => self.team(team_id, league_id, season, options).await,
            Route::Favorites => Ok(self.favorites_list(options)),
            Route::Login => {
                match self.gate.session() {
                    Some(session) => println!("Logged in as {}.", session.username),
                    None => println!("Run `leaguedesk login -u <user> -p <password>`."),
                }
                Ok(true)
            }
        }
    }

    async fn home(&mut self, options: PageOptions) -> anyhow::Result<bool> {
        let mut page = HomePage::new();
        if let Some(toast) = page.load(&self.client).await {
            render::toast(&toast);
            return Ok(false);
        }

        if let Some(term) = options.search {
            page.set_search(term);
        }
        render::leagues(&page.visible());
        Ok(true)
    }

    async fn categories(&mut self, options: PageOptions) -> anyhow::Result<bool> {
        let mut page = CategoriesPage::new(options.category);
        if let Some(toast) = page.load(&self.client).await {
            render::toast(&toast);
            return Ok(false);
        }

        if let Some(term) = options.search {
            page.set_search(term);
        }
        render::category_tabs(&page.counts(), page.category());
        render::leagues(&page.visible());
        Ok(true)
    }

    async fn standings(
        &mut self,
        league_id: u32,
        season: i32,
        options: PageOptions,
    ) -> anyhow::Result<bool> {
        let mut page = StandingsPage::new(league_id, season);
        if let Some(toast) = page.load(&self.client).await {
            render::toast(&toast);
            return Ok(false);
        }

        if let Some(term) = options.search {
            page.set_search(term);
        }
        render::standings(page.league_name(), page.season(), &page.visible(), &self.favorites);

        if let Some(team_id) = options.favorite {
            let toast = page.add_favorite(team_id, &mut self.favorites)?;
            render::toast(&toast);
            return Ok(!toast.is_error());
        }
        Ok(true)
    }

    async fn seasons(&mut self, league_id: u32) -> anyhow::Result<bool> {
        let mut page = StandingsPage::new(league_id, leaguedesk_api::DEFAULT_SEASON);
        if let Some(toast) = page.load_seasons(&self.client).await {
            render::toast(&toast);
            return Ok(false);
        }

        render::seasons(page.seasons());
        Ok(true)
    }

    async fn team(
        &mut self,
        team_id: u32,
        league_id: u32,
        season: i32,
        options: PageOptions,
    ) -> anyhow::Result<bool> {
        let mut page = TeamDetailPage::new(team_id, league_id, season);
        if let Some(toast) = page.load(&self.client).await {
            render::toast(&toast);
            return Ok(false);
        }

        if options.toggle_favorite {
            let toast = page.toggle_favorite(&mut self.favorites)?;
            render::toast(&toast);
        }
        render::team(&page, &self.favorites);
        Ok(true)
    }

    fn favorites_list(&self, options: PageOptions) -> bool {
        let mut page = FavoritesPage::new();
        if let Some(term) = options.search.clone() {
            page.set_search(term);
        }

        if self.favorites.is_empty() {
            println!("No favorite teams yet. Add some from a league table with `standings <league> --favorite <team>`.");
            return true;
        }

        let visible = page.visible(&self.favorites);
        println!("Favorite Teams - {}", FavoritesPage::summary(&self.favorites));
        if visible.is_empty() {
            if let Some(term) = options.search {
                println!("No favorite teams match \"{}\".", term);
            }
            return true;
        }
        render::favorites(&visible);
        true
    }

    pub fn edit_favorite(&mut self, id: &str, patch: FavoritePatch) -> anyhow::Result<bool> {
        if !self.favorites_allowed()? {
            return Ok(false);
        }
        let toast = FavoritesPage::new().edit(&mut self.favorites, id, patch)?;
        render::toast(&toast);
        Ok(!toast.is_error())
    }

    pub fn remove_favorite(&mut self, id: &str) -> anyhow::Result<bool> {
        if !self.favorites_allowed()? {
            return Ok(false);
        }
        let toast = FavoritesPage::new().delete(&mut self.favorites, id)?;
        render::toast(&toast);
        Ok(!toast.is_error())
    }

    fn favorites_allowed(&self) -> anyhow::Result<bool> {
        match self.gate.guard(Route::Favorites)? {
            Access::Granted => Ok(true),
            Access::Redirect { .. } => {
                render::error_line("Login required. Run `leaguedesk login -u <user> -p <password>`.");
                Ok(false)
            }
        }
    }
}
