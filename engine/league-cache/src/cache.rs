use crate::clock::{Clock, SystemClock};
use chrono::{DateTime, Duration, Utc};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Single-slot cache with a fixed identity and a time-to-live
///
/// The slot lock is held for the whole refresh, so at most one upstream fetch
/// is in flight per cache. Failed refreshes are not stored: the next access
/// tries again.
pub struct TtlCache<T> {
    name: &'static str,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    slot: Mutex<Option<CachedValue<T>>>,
    stats: parking_lot::Mutex<CacheStats>,
}

#[derive(Debug, Clone)]
struct CachedValue<T> {
    value: T,
    cached_at: DateTime<Utc>,
}

/// Counters for one cache
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub refreshes: u64,
    pub failures: u64,
    pub last_refresh: Option<DateTime<Utc>>,
}

impl<T: Clone> TtlCache<T> {
    /// Create a cache on the system clock
    pub fn new(name: &'static str, ttl_seconds: u64) -> Self {
        Self::with_clock(name, ttl_seconds, Arc::new(SystemClock))
    }

    /// Create a cache on an injected clock
    pub fn with_clock(name: &'static str, ttl_seconds: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            name,
            ttl: ttl_duration(ttl_seconds),
            clock,
            slot: Mutex::new(None),
            stats: parking_lot::Mutex::new(CacheStats::default()),
        }
    }

    /// Return the cached value, or run `refresh` if the slot is empty or expired
    pub async fn get_or_refresh<F, Fut, E>(&self, refresh: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref() {
            let age = self.clock.now() - cached.cached_at;
            if age < self.ttl {
                debug!("Cache {} hit (age: {}s)", self.name, age.num_seconds());
                self.stats.lock().hits += 1;
                return Ok(cached.value.clone());
            }
            debug!("Cache {} expired (age: {}s)", self.name, age.num_seconds());
        }

        match refresh().await {
            Ok(value) => {
                let cached_at = self.clock.now();
                *slot = Some(CachedValue { value: value.clone(), cached_at });

                let mut stats = self.stats.lock();
                stats.refreshes += 1;
                stats.last_refresh = Some(cached_at);
                info!("Cache {} refreshed", self.name);
                Ok(value)
            }
            Err(e) => {
                self.stats.lock().failures += 1;
                warn!("Cache {} refresh failed: {}", self.name, e);
                Err(e)
            }
        }
    }

    /// Return the cached value only if it is still fresh
    pub async fn peek(&self) -> Option<T> {
        let slot = self.slot.lock().await;
        let cached = slot.as_ref()?;
        (self.clock.now() - cached.cached_at < self.ttl).then(|| cached.value.clone())
    }

    /// Drop the cached value so the next access refetches
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
        debug!("Cache {} invalidated", self.name);
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.lock().clone()
    }
}

/// Intervals past what chrono can represent never expire
fn ttl_duration(ttl_seconds: u64) -> Duration {
    i64::try_from(ttl_seconds).ok().and_then(Duration::try_seconds).unwrap_or(Duration::MAX)
}

impl<T> std::fmt::Debug for TtlCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("name", &self.name)
            .field("ttl_seconds", &self.ttl.num_seconds())
            .finish()
    }
}
