//! Sleeper API client
//!
//! Read-only access to the three Sleeper endpoints the dashboard needs:
//! league users, league rosters and the bulk NFL player catalog.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use api::LeagueApi;
pub use client::SleeperClient;
pub use config::SleeperConfig;
pub use error::SleeperError;
pub use types::{RosterSettings, SleeperPlayer, SleeperRoster, SleeperUser};

// Result type alias
pub type Result<T> = std::result::Result<T, SleeperError>;
