// API client for the football standings service
pub mod football;
pub mod models;

// Re-export common types
pub use football::{ApiError, FootballClient, Operation, Result, DEFAULT_BASE_URL, DEFAULT_SEASON};
pub use models::{League, Logos, Season, SeasonType, Standing, Stat, Team};
