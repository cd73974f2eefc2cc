//! Sleeper API integration

use crate::api::LeagueApi;
use crate::config::SleeperConfig;
use crate::types::{SleeperPlayer, SleeperRoster, SleeperUser};
use crate::{Result, SleeperError};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, error, info};

/// Sleeper API client
#[derive(Debug, Clone)]
pub struct SleeperClient {
    config: SleeperConfig,
    client: reqwest::Client,
}

impl SleeperClient {
    /// Create a new Sleeper API client
    pub fn new(config: SleeperConfig) -> Result<Self> {
        let client =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &SleeperConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base_url.trim_end_matches('/'), path)
    }

    /// GET a JSON document, keeping transport and shape failures apart
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("SleeperClient GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("Sleeper API error: {} returned {}", url, status);
            return Err(SleeperError::Status { url, status: status.as_u16() });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| {
            error!("Failed to parse {} response from {}: {}", endpoint, url, source);
            SleeperError::Malformed { endpoint, source }
        })
    }
}

#[async_trait::async_trait]
impl LeagueApi for SleeperClient {
    async fn league_users(&self, league_id: &str) -> Result<Vec<SleeperUser>> {
        let users: Vec<SleeperUser> =
            self.get_json("users", &format!("league/{league_id}/users")).await?;
        info!("Fetched {} users for league {}", users.len(), league_id);
        Ok(users)
    }

    async fn league_rosters(&self, league_id: &str) -> Result<Vec<SleeperRoster>> {
        let rosters: Vec<SleeperRoster> =
            self.get_json("rosters", &format!("league/{league_id}/rosters")).await?;
        info!("Fetched {} rosters for league {}", rosters.len(), league_id);
        Ok(rosters)
    }

    async fn nfl_players(&self) -> Result<BTreeMap<String, SleeperPlayer>> {
        let players: BTreeMap<String, SleeperPlayer> =
            self.get_json("players", "players/nfl").await?;
        info!("Fetched {} players from the NFL catalog", players.len());
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = SleeperClient::new(SleeperConfig {
            api_base_url: "https://api.sleeper.app/v1/".to_string(),
            timeout_secs: 5,
        })
        .unwrap();

        assert_eq!(
            client.url("league/42/rosters"),
            "https://api.sleeper.app/v1/league/42/rosters"
        );
    }

    #[test]
    fn test_default_config_points_at_public_api() {
        let client = SleeperClient::new(SleeperConfig::default()).unwrap();
        assert_eq!(client.url("players/nfl"), "https://api.sleeper.app/v1/players/nfl");
        assert_eq!(client.config().timeout_secs, 30);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let client = SleeperClient::new(SleeperConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
        })
        .unwrap();

        let err = client.league_users("1").await.unwrap_err();
        assert!(matches!(err, SleeperError::Http(_)));
        assert!(!err.is_malformed());
    }
}
