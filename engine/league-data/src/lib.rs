//! League Data - the data core behind the league dashboard
//!
//! Pulls live standings from the Sleeper API and historical records from a
//! spreadsheet export, applies display-name aliases, and links draft picks to
//! player profiles. Every upstream source sits behind its own TTL cache and
//! degrades to an explicit "unavailable" state instead of failing the page.

pub mod alias;
pub mod config;
pub mod dashboard;
pub mod draft_links;
pub mod error;
pub mod logging;
pub mod outcome;
pub mod sheets;
pub mod standings;
pub mod table;


pub use alias::AliasMap;
pub use config::{load_config, DashboardConfig};
pub use dashboard::{DashboardStats, LeagueDashboard, Section};
pub use draft_links::{annotate, profile_url, DraftLinkAnnotator, PLAYER_COLUMN};
pub use error::{AliasError, FailureKind, FailureReason, SheetError};
pub use logging::initialize_logging;
pub use outcome::Outcome;
pub use sheets::{HistoricalRecordsLoader, SheetSource, XlsxExportSource};
pub use standings::{ManagerStanding, StandingsFetcher, UNKNOWN_MANAGER};
pub use table::{Cell, SheetDocument, Table};

// Re-export commonly used types
pub use league_cache::{Clock, ManualClock, SystemClock};
pub use player_registry::{PlayerDirectory, PlayerDirectoryCache, PlayerLookup};
pub use sleeper_client::{LeagueApi, SleeperClient};
