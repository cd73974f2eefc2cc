//! League dashboard data core
//!
//! Owns the three upstream caches and serves each page section in a
//! display-ready form. A failing source only affects the sections it backs.

use crate::alias::AliasMap;
use crate::config::DashboardConfig;
use crate::draft_links::DraftLinkAnnotator;
use crate::error::FailureReason;
use crate::outcome::Outcome;
use crate::sheets::{HistoricalRecordsLoader, SheetSource, XlsxExportSource};
use crate::standings::{ManagerStanding, StandingsFetcher};
use crate::table::Table;
use anyhow::{Context, Result};
use league_cache::{CacheStats, Clock, SystemClock};
use player_registry::PlayerDirectoryCache;
use sleeper_client::{LeagueApi, SleeperClient};
use std::sync::Arc;
use tracing::info;

/// What a page section can show
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    Ready(T),
    /// The requested sheet or year does not exist
    NotFound(String),
    /// The backing source could not be read
    Unavailable(FailureReason),
}

impl<T> Section<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Section::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Outcome<T>> for Section<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Ready(value) => Section::Ready(value),
            Outcome::Unavailable(reason) => Section::Unavailable(reason),
        }
    }
}

/// Cache counters for every upstream source
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub players: CacheStats,
    pub standings: CacheStats,
    pub sheets: CacheStats,
}

pub struct LeagueDashboard {
    aliases: Arc<AliasMap>,
    history_sheet: String,
    annotator: DraftLinkAnnotator,
    players: PlayerDirectoryCache,
    standings: StandingsFetcher,
    records: HistoricalRecordsLoader,
}

impl LeagueDashboard {
    /// Assemble the dashboard over injected sources and clock
    pub fn new(
        config: &DashboardConfig,
        api: Arc<dyn LeagueApi>,
        sheets: Arc<dyn SheetSource>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let aliases = Arc::new(config.alias_map().context("Invalid alias table")?);

        Ok(Self {
            aliases: aliases.clone(),
            history_sheet: config.sheets.history_sheet.clone(),
            annotator: DraftLinkAnnotator::new(config.links.profile_base_url.clone()),
            players: PlayerDirectoryCache::with_clock(
                api.clone(),
                config.cache.players_ttl_secs,
                clock.clone(),
            ),
            standings: StandingsFetcher::with_clock(
                api,
                config.league.league_id.clone(),
                aliases,
                config.cache.standings_ttl_secs,
                clock.clone(),
            ),
            records: HistoricalRecordsLoader::with_clock(
                sheets,
                config.cache.sheets_ttl_secs,
                clock,
            ),
        })
    }

    /// Dashboard backed by the live Sleeper API and the Google Sheets export
    pub fn from_config(config: &DashboardConfig) -> Result<Self> {
        let api = SleeperClient::new(config.sleeper.clone()).context("Failed to create Sleeper client")?;
        let sheets = XlsxExportSource::new(&config.sheets.sheet_id, config.sheets.timeout_secs)
            .context("Failed to create spreadsheet client")?;
        info!(
            "Dashboard configured for league {} and workbook {}",
            config.league.league_id,
            sheets.url()
        );

        Self::new(config, Arc::new(api), Arc::new(sheets), Arc::new(SystemClock))
    }

    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    pub fn history_sheet(&self) -> &str {
        &self.history_sheet
    }

    /// Live standings, ranked by points-for
    pub async fn standings(&self) -> Section<Vec<ManagerStanding>> {
        self.standings.fetch_standings().await.map(|standings| standings.to_vec()).into()
    }

    /// All-time records sheet with aliases applied
    pub async fn history(&self) -> Section<Table> {
        let document = match self.records.load().await {
            Outcome::Ready(document) => document,
            Outcome::Unavailable(reason) => return Section::Unavailable(reason),
        };

        match document.get(&self.history_sheet) {
            Some(table) => Section::Ready(table.clone().apply_aliases(&self.aliases)),
            None => Section::NotFound(self.history_sheet.clone()),
        }
    }

    /// Draft-year sheet names, newest first; empty when the workbook is unavailable
    pub async fn draft_years(&self) -> Vec<String> {
        self.records.get_sheets().await.draft_years(&self.history_sheet)
    }

    /// One draft-year sheet, aliased and with player profile links
    pub async fn draft(&self, year: &str) -> Section<Table> {
        let document = match self.records.load().await {
            Outcome::Ready(document) => document,
            Outcome::Unavailable(reason) => return Section::Unavailable(reason),
        };

        let is_draft_year = document.draft_years(&self.history_sheet).iter().any(|name| name == year);
        let table = match document.get(year) {
            Some(table) if is_draft_year => table.clone(),
            _ => return Section::NotFound(year.to_string()),
        };

        let directory = self.players.directory().await;
        let table = table.apply_aliases(&self.aliases);
        Section::Ready(self.annotator.annotate(table, &*directory))
    }

    /// Profile link for an exact player name, when the directory knows it
    pub async fn player_link(&self, full_name: &str) -> Option<String> {
        self.players.get_player_id(full_name).await.map(|id| self.annotator.profile_url(&id))
    }

    /// Case-insensitive player search over the cached directory
    pub async fn search_players(&self, query: &str) -> Vec<(String, String)> {
        self.players
            .directory()
            .await
            .search_players(query)
            .into_iter()
            .map(|(name, id)| (name.to_string(), self.annotator.profile_url(id)))
            .collect()
    }

    /// Drop every cached source so the next access refetches
    pub async fn refresh_all(&self) {
        self.players.invalidate().await;
        self.standings.invalidate().await;
        self.records.invalidate().await;
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            players: self.players.stats(),
            standings: self.standings.stats(),
            sheets: self.records.stats(),
        }
    }
}
