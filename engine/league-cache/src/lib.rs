//! League Cache - time-keyed caches for upstream league data
//!
//! Every upstream source the dashboard reads from is wrapped in a [`TtlCache`]
//! with its own expiry interval. Expiry is checked lazily on access and a
//! refresh holds the slot lock, so concurrent readers of an expired cache share
//! a single upstream fetch.

pub mod cache;
pub mod clock;

pub use cache::{CacheStats, TtlCache};
pub use clock::{Clock, ManualClock, SystemClock};

/// Default interval for the bulk player catalog (one hour)
pub const DEFAULT_PLAYER_TTL_SECS: u64 = 3600;

/// Default interval for live league standings (ten minutes)
pub const DEFAULT_STANDINGS_TTL_SECS: u64 = 600;

/// Default interval for the historical spreadsheet (one minute)
pub const DEFAULT_SHEETS_TTL_SECS: u64 = 60;

/// Longest interval accepted from configuration
pub const MAX_TTL_SECS: u64 = (i64::MAX / 1000) as u64;
