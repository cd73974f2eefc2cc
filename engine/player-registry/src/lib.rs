//! Player Registry - Maps full player names to Sleeper player ids
//!
//! The directory is rebuilt wholesale from the bulk player catalog whenever
//! its cache interval expires. Lookups never fail: an unavailable catalog
//! behaves like an empty directory.

pub mod cache;
pub mod registry;
pub mod types;

pub use cache::PlayerDirectoryCache;
pub use registry::PlayerDirectory;
pub use types::{BuildReport, PlayerLookup};
