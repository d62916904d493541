// Client state and page logic for LeagueDesk
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod notify;
pub mod pages;
pub mod routes;
pub mod session;
pub mod source;
pub mod standings;

pub use config::Config;
pub use error::Error;
pub use favorites::{FavoritePatch, FavoriteTeam, FavoritesStore};
pub use filter::LeagueCategory;
pub use notify::{Toast, ToastVariant};
pub use routes::Route;
pub use session::{Access, AuthGate, LoginOutcome, Session};
pub use source::FootballSource;

/// Result type alias for the whole crate
pub type Result<T> = std::result::Result<T, Error>;
