use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use leaguedesk_core::{Config, FavoritePatch, LeagueCategory, Route};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod render;

use app::{App, PageOptions};

#[derive(Parser)]
#[command(name = "leaguedesk")]
#[command(version, about = "Football leagues, standings and favorite teams in your terminal", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Standings API host
    #[arg(long, global = true, env = "LEAGUEDESK_API_URL")]
    api_url: Option<String>,

    /// SQLite file holding session and favorites
    #[arg(long, global = true, env = "LEAGUEDESK_STORAGE")]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in (demo/12345) and continue to the page you asked for
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Clear the saved session
    Logout,
    /// Show who is logged in
    Whoami,
    /// List leagues
    Leagues {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Leagues grouped by region
    Categories {
        /// all, european, american, international, other
        #[arg(short, long, default_value = "all")]
        category: LeagueCategory,
        #[arg(short, long)]
        search: Option<String>,
    },
    /// League table for a season
    Standings {
        league_id: u32,
        #[arg(long)]
        season: Option<i32>,
        #[arg(short, long)]
        search: Option<String>,
        /// Save this team id from the table to favorites
        #[arg(long)]
        favorite: Option<u32>,
    },
    /// Seasons available for a league
    Seasons { league_id: u32 },
    /// One team's table line
    Team {
        team_id: u32,
        #[arg(long)]
        league: u32,
        #[arg(long)]
        season: Option<i32>,
        /// Add to favorites, or remove if already saved
        #[arg(long)]
        toggle_favorite: bool,
    },
    /// Manage favorite teams
    Favorites {
        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },
    /// Open a page by path, e.g. /standings/140?season=2022
    Open { route: Route },
}

#[derive(clap::Subcommand)]
enum FavoritesAction {
    /// List saved teams
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Edit a saved team's snapshot
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        league: Option<String>,
        #[arg(long)]
        position: Option<i32>,
        #[arg(long)]
        points: Option<i32>,
        #[arg(long)]
        played: Option<i32>,
        #[arg(long)]
        won: Option<i32>,
        #[arg(long)]
        drawn: Option<i32>,
        #[arg(long)]
        lost: Option<i32>,
        #[arg(long)]
        goals_for: Option<i32>,
        #[arg(long)]
        goals_against: Option<i32>,
        #[arg(long, allow_hyphen_values = true)]
        goal_difference: Option<i32>,
    },
    /// Remove a saved team
    Remove { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so page output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leaguedesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    if let Some(path) = cli.storage {
        config.storage.path = Some(path);
    }

    let season = |s: Option<i32>| s.unwrap_or(config.api.default_season);
    let mut app = App::new(&config)?;

    let ok = match cli.command {
        Some(Commands::Login { username, password }) => app.login(&username, &password).await?,
        Some(Commands::Logout) => app.logout()?,
        Some(Commands::Whoami) => app.whoami(),
        Some(Commands::Leagues { search }) => {
            let options = PageOptions {
                search,
                ..Default::default()
            };
            app.visit(Route::Home, options).await?
        }
        Some(Commands::Categories { category, search }) => {
            let options = PageOptions {
                search,
                category,
                ..Default::default()
            };
            app.visit(Route::Categories, options).await?
        }
        Some(Commands::Standings {
            league_id,
            season: s,
            search,
            favorite,
        }) => {
            let route = Route::Standings {
                league_id,
                season: season(s),
            };
            let options = PageOptions {
                search,
                favorite,
                ..Default::default()
            };
            app.visit(route, options).await?
        }
        Some(Commands::Seasons { league_id }) => {
            app.visit(Route::Seasons { league_id }, PageOptions::default())
                .await?
        }
        Some(Commands::Team {
            team_id,
            league,
            season: s,
            toggle_favorite,
        }) => {
            let route = Route::Team {
                team_id,
                league_id: league,
                season: season(s),
            };
            let options = PageOptions {
                toggle_favorite,
                ..Default::default()
            };
            app.visit(route, options).await?
        }
        Some(Commands::Favorites { action }) => match action {
            None => app.visit(Route::Favorites, PageOptions::default()).await?,
            Some(FavoritesAction::List { search }) => {
                let options = PageOptions {
                    search,
                    ..Default::default()
                };
                app.visit(Route::Favorites, options).await?
            }
            Some(FavoritesAction::Edit {
                id,
                name,
                league,
                position,
                points,
                played,
                won,
                drawn,
                lost,
                goals_for,
                goals_against,
                goal_difference,
            }) => {
                let patch = FavoritePatch {
                    name,
                    logo: None,
                    league,
                    position,
                    points,
                    played,
                    won,
                    drawn,
                    lost,
                    goals_for,
                    goals_against,
                    goal_difference,
                };
                app.edit_favorite(&id, patch)?
            }
            Some(FavoritesAction::Remove { id }) => app.remove_favorite(&id)?,
        },
        Some(Commands::Open { route }) => app.visit(route, PageOptions::default()).await?,
        None => {
            println!("No command specified. Try --help");
            true
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
