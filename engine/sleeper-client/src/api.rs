use crate::types::{SleeperPlayer, SleeperRoster, SleeperUser};
use crate::Result;
use std::collections::BTreeMap;

/// Upstream league data the dashboard reads
///
/// Implemented by [`crate::SleeperClient`] over HTTP; tests substitute
/// in-memory fixtures.
#[async_trait::async_trait]
pub trait LeagueApi: Send + Sync {
    /// Members of the league
    async fn league_users(&self, league_id: &str) -> Result<Vec<SleeperUser>>;

    /// Rosters of the league, one per manager slot
    async fn league_rosters(&self, league_id: &str) -> Result<Vec<SleeperRoster>>;

    /// Full NFL player catalog keyed by player id, in ascending id order
    async fn nfl_players(&self) -> Result<BTreeMap<String, SleeperPlayer>>;
}
