//! Dashboard configuration management

use crate::alias::AliasMap;
use crate::draft_links::DEFAULT_PROFILE_BASE_URL;
use crate::error::AliasError;
use anyhow::{Context, Result};
use league_cache::{
    DEFAULT_PLAYER_TTL_SECS, DEFAULT_SHEETS_TTL_SECS, DEFAULT_STANDINGS_TTL_SECS, MAX_TTL_SECS,
};
use serde::{Deserialize, Serialize};
use sleeper_client::SleeperConfig;
use std::path::Path;

/// Environment variable prefix, e.g. `DASHBOARD__LEAGUE__LEAGUE_ID`
pub const ENV_PREFIX: &str = "DASHBOARD";

/// Main dashboard configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub league: LeagueConfig,
    pub sleeper: SleeperConfig,
    pub sheets: SheetsConfig,
    pub cache: CacheConfig,
    pub links: LinkConfig,
    pub logging: LoggingConfig,

    /// Display-name aliases, applied everywhere a manager name appears
    pub aliases: Vec<AliasEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Sleeper league id
    pub league_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetsConfig {
    /// Google Sheets document id
    pub sheet_id: String,

    /// Name of the all-time records sheet
    pub history_sheet: String,

    /// Download timeout in seconds
    pub timeout_secs: u64,
}

/// Expiry interval of each upstream cache, in seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub players_ttl_secs: u64,
    pub standings_ttl_secs: u64,
    pub sheets_ttl_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Host serving `/players/<id>` profile pages
    pub profile_base_url: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty, compact)
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub name: String,
    pub nickname: String,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self { league_id: "1312559657998368768".to_string() }
    }
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            sheet_id: "1JhDhOf2Qkhl4dCOmv37GZhJNJqy41E5rOvt9IATfmc8".to_string(),
            history_sheet: "Champs, Chumps and Oh So Close".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            players_ttl_secs: DEFAULT_PLAYER_TTL_SECS,
            standings_ttl_secs: DEFAULT_STANDINGS_TTL_SECS,
            sheets_ttl_secs: DEFAULT_SHEETS_TTL_SECS,
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self { profile_base_url: DEFAULT_PROFILE_BASE_URL.to_string() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "compact".to_string() }
    }
}

impl AliasEntry {
    pub fn new(name: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self { name: name.into(), nickname: nickname.into() }
    }
}

impl DashboardConfig {
    /// League defaults including the standing nicknames
    pub fn with_default_aliases() -> Self {
        Self {
            aliases: vec![AliasEntry::new("Selkow", "Jared"), AliasEntry::new("Dak", "Brodack")],
            ..Self::default()
        }
    }

    pub fn alias_map(&self) -> std::result::Result<AliasMap, AliasError> {
        AliasMap::new(self.aliases.iter().map(|entry| (entry.name.as_str(), entry.nickname.as_str())))
    }
}

/// Load configuration from an optional TOML file and `DASHBOARD__*` variables
///
/// Without a file, the built-in league defaults (nicknames included) are the base.
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    let defaults = DashboardConfig::with_default_aliases();
    let mut builder = config::Config::builder().add_source(config::File::from_str(
        &toml::to_string(&defaults).context("Failed to serialize default configuration")?,
        config::FileFormat::Toml,
    ));

    if let Some(path) = path {
        tracing::debug!("Loading configuration from file: {:?}", path);
        builder = builder.add_source(config::File::from(path).required(true));
    }

    let config: DashboardConfig = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to read configuration sources")?
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    validate_config(&config)?;
    Ok(config)
}

/// Validate configuration
pub fn validate_config(config: &DashboardConfig) -> Result<()> {
    if config.league.league_id.trim().is_empty() {
        return Err(anyhow::anyhow!("League id must not be empty"));
    }

    if config.sheets.sheet_id.trim().is_empty() {
        return Err(anyhow::anyhow!("Sheet id must not be empty"));
    }

    let ttls = [
        ("players", config.cache.players_ttl_secs),
        ("standings", config.cache.standings_ttl_secs),
        ("sheets", config.cache.sheets_ttl_secs),
    ];
    for (name, ttl) in ttls {
        if ttl == 0 || ttl > MAX_TTL_SECS {
            return Err(anyhow::anyhow!("Invalid {} cache interval: {}", name, ttl));
        }
    }

    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow::anyhow!("Invalid log level: {}", config.logging.level)),
    }

    match config.logging.format.as_str() {
        "json" | "pretty" | "compact" => {}
        _ => return Err(anyhow::anyhow!("Invalid log format: {}", config.logging.format)),
    }

    config.alias_map().context("Invalid alias table")?;
    Ok(())
}

/// Save configuration to a TOML file
pub fn save_config(config: &DashboardConfig, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config).context("Failed to serialize configuration")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write configuration: {:?}", path))?;
    Ok(())
}
