use crate::registry::PlayerDirectory;
use league_cache::{CacheStats, Clock, SystemClock, TtlCache, DEFAULT_PLAYER_TTL_SECS};
use sleeper_client::{LeagueApi, SleeperError};
use std::sync::Arc;
use tracing::warn;

/// Player directory cache over the bulk player catalog
pub struct PlayerDirectoryCache {
    api: Arc<dyn LeagueApi>,
    cache: TtlCache<Arc<PlayerDirectory>>,
}

impl PlayerDirectoryCache {
    /// Create a cache with the default one-hour interval
    pub fn new(api: Arc<dyn LeagueApi>) -> Self {
        Self::with_clock(api, DEFAULT_PLAYER_TTL_SECS, Arc::new(SystemClock))
    }

    pub fn with_clock(api: Arc<dyn LeagueApi>, ttl_seconds: u64, clock: Arc<dyn Clock>) -> Self {
        Self { api, cache: TtlCache::with_clock("player_directory", ttl_seconds, clock) }
    }

    /// Current directory, rebuilding it from a fresh catalog fetch when expired
    pub async fn load(&self) -> Result<Arc<PlayerDirectory>, SleeperError> {
        self.cache
            .get_or_refresh(move || async move {
                let catalog = self.api.nfl_players().await?;
                Ok::<_, SleeperError>(Arc::new(PlayerDirectory::from_catalog(&catalog)))
            })
            .await
    }

    /// Current directory, or an empty one when the catalog is unavailable
    pub async fn directory(&self) -> Arc<PlayerDirectory> {
        match self.load().await {
            Ok(directory) => directory,
            Err(e) => {
                warn!("Player catalog unavailable, links disabled: {}", e);
                Arc::new(PlayerDirectory::new())
            }
        }
    }

    /// Look up a single player id; fails closed
    pub async fn get_player_id(&self, full_name: &str) -> Option<String> {
        self.directory().await.get_player_id(full_name).map(str::to_string)
    }

    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
