//! Live league standings

use crate::alias::AliasMap;
use crate::error::FailureReason;
use crate::outcome::Outcome;
use league_cache::{CacheStats, Clock, SystemClock, TtlCache, DEFAULT_STANDINGS_TTL_SECS};
use serde::{Deserialize, Serialize};
use sleeper_client::{LeagueApi, RosterSettings, SleeperError, SleeperRoster, SleeperUser};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Manager name used when a roster's owner is not among the league users
pub const UNKNOWN_MANAGER: &str = "Unknown";

/// Fractional digits kept on points-for
pub const POINTS_DIGITS: i32 = 2;

/// One row of the standings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerStanding {
    #[serde(rename = "Manager")]
    pub manager: String,

    /// "W-L"
    #[serde(rename = "Record")]
    pub record: String,

    #[serde(rename = "Points For")]
    pub points_for: f64,

    #[serde(rename = "Max PF (Potential)")]
    pub max_points_for: f64,
}

pub fn round_points(points: f64) -> f64 {
    let scale = 10f64.powi(POINTS_DIGITS);
    (points * scale).round() / scale
}

/// `fpts + fpts_decimal / 100`, rounded
pub fn points_for(settings: &RosterSettings) -> f64 {
    round_points(settings.points_for_hundredths() as f64 / 100.0)
}

/// Join users and rosters on the owner id and rank by points-for
///
/// The sort is stable, so managers on equal points keep roster order.
pub fn build_standings(
    users: &[SleeperUser],
    rosters: &[SleeperRoster],
    aliases: &AliasMap,
) -> Vec<ManagerStanding> {
    let managers: HashMap<&str, &str> = users
        .iter()
        .map(|user| (user.user_id.as_str(), aliases.resolve(&user.display_name)))
        .collect();

    let mut standings: Vec<ManagerStanding> = rosters
        .iter()
        .map(|roster| {
            let manager = roster
                .owner_id
                .as_deref()
                .and_then(|owner| managers.get(owner).copied())
                .unwrap_or(UNKNOWN_MANAGER);
            let settings = &roster.settings;

            ManagerStanding {
                manager: manager.to_string(),
                record: format!("{}-{}", settings.wins, settings.losses),
                points_for: points_for(settings),
                max_points_for: settings.ppts.unwrap_or(0.0),
            }
        })
        .collect();

    standings.sort_by(|a, b| b.points_for.total_cmp(&a.points_for));
    standings
}

/// League snapshot fetcher with a short-lived cache
pub struct StandingsFetcher {
    api: Arc<dyn LeagueApi>,
    league_id: String,
    aliases: Arc<AliasMap>,
    cache: TtlCache<Arc<Vec<ManagerStanding>>>,
}

impl StandingsFetcher {
    pub fn new(api: Arc<dyn LeagueApi>, league_id: impl Into<String>, aliases: Arc<AliasMap>) -> Self {
        Self::with_clock(api, league_id, aliases, DEFAULT_STANDINGS_TTL_SECS, Arc::new(SystemClock))
    }

    pub fn with_clock(
        api: Arc<dyn LeagueApi>,
        league_id: impl Into<String>,
        aliases: Arc<AliasMap>,
        ttl_seconds: u64,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            api,
            league_id: league_id.into(),
            aliases,
            cache: TtlCache::with_clock("league_standings", ttl_seconds, clock),
        }
    }

    /// Ranked standings, or the reason they could not be built
    pub async fn fetch_standings(&self) -> Outcome<Arc<Vec<ManagerStanding>>> {
        let result = self
            .cache
            .get_or_refresh(move || async move {
                let (users, rosters) = tokio::try_join!(
                    self.api.league_users(&self.league_id),
                    self.api.league_rosters(&self.league_id)
                )?;
                let standings = build_standings(&users, &rosters, &self.aliases);
                info!("Built standings for {} managers", standings.len());
                Ok::<_, SleeperError>(Arc::new(standings))
            })
            .await;

        match result {
            Ok(standings) => Outcome::Ready(standings),
            Err(e) => {
                warn!("Standings unavailable for league {}: {}", self.league_id, e);
                Outcome::Unavailable(FailureReason::from_sleeper("standings", &e))
            }
        }
    }

    /// Ranked standings; empty when the league API is unavailable
    pub async fn get_standings(&self) -> Vec<ManagerStanding> {
        self.fetch_standings().await.map(|standings| standings.to_vec()).unwrap_or_empty()
    }

    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use sleeper_client::SleeperPlayer;
    use std::collections::BTreeMap;

    fn user(id: &str, name: &str) -> SleeperUser {
        SleeperUser { user_id: id.to_string(), display_name: name.to_string() }
    }

    fn roster(owner: Option<&str>, wins: u32, losses: u32, fpts: i64, decimal: i64) -> SleeperRoster {
        SleeperRoster {
            owner_id: owner.map(str::to_string),
            settings: RosterSettings {
                wins,
                losses,
                fpts,
                fpts_decimal: decimal,
                ppts: None,
            },
        }
    }

    fn aliases() -> AliasMap {
        AliasMap::new([("Selkow", "Jared"), ("Dak", "Brodack")]).unwrap()
    }

    #[test]
    fn test_points_for_combines_hundredths() {
        let r = roster(Some("1"), 0, 0, 1234, 56);
        assert_eq!(points_for(&r.settings), 1234.56);

        let r = roster(Some("1"), 0, 0, 1000, 5);
        assert_eq!(points_for(&r.settings), 1000.05);

        let r = roster(Some("1"), 0, 0, 0, 0);
        assert_eq!(points_for(&r.settings), 0.0);
    }

    #[test]
    fn test_round_points_keeps_two_digits() {
        assert_eq!(round_points(101.126), 101.13);
        assert_eq!(round_points(99.994), 99.99);
    }

    #[test]
    fn test_join_resolves_aliases_and_unknown_owners() {
        let users = vec![user("1", "Selkow"), user("2", "Dak"), user("3", "Mike")];
        let rosters = vec![
            roster(Some("3"), 4, 4, 900, 0),
            roster(Some("1"), 5, 3, 1000, 25),
            roster(Some("99"), 2, 6, 800, 10),
            roster(None, 1, 7, 700, 0),
            roster(Some("2"), 6, 2, 1100, 99),
        ];

        let standings = build_standings(&users, &rosters, &aliases());
        let managers: Vec<&str> = standings.iter().map(|s| s.manager.as_str()).collect();
        assert_eq!(managers, vec!["Brodack", "Jared", "Mike", UNKNOWN_MANAGER, UNKNOWN_MANAGER]);
        assert_eq!(standings[0].record, "6-2");
        assert_eq!(standings[0].points_for, 1100.99);
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let users = vec![user("a", "A"), user("b", "B"), user("c", "C"), user("d", "D")];
        let rosters = vec![
            roster(Some("a"), 0, 0, 500, 0),
            roster(Some("b"), 0, 0, 900, 50),
            roster(Some("c"), 0, 0, 500, 0),
            roster(Some("d"), 0, 0, 900, 50),
        ];

        let standings = build_standings(&users, &rosters, &AliasMap::default());
        let managers: Vec<&str> = standings.iter().map(|s| s.manager.as_str()).collect();
        assert_eq!(managers, vec!["B", "D", "A", "C"]);
        assert!(standings.windows(2).all(|pair| pair[0].points_for >= pair[1].points_for));
    }

    #[test]
    fn test_single_manager_scenario() {
        let users = vec![user("1", "Selkow")];
        let mut r = roster(Some("1"), 5, 3, 1000, 25);
        r.settings.ppts = Some(1100.0);

        let standings = build_standings(&users, &[r], &aliases());
        assert_eq!(
            standings,
            vec![ManagerStanding {
                manager: "Jared".to_string(),
                record: "5-3".to_string(),
                points_for: 1000.25,
                max_points_for: 1100.0,
            }]
        );
    }

    #[test]
    fn test_standing_serializes_with_table_headers() {
        let standing = ManagerStanding {
            manager: "Jared".to_string(),
            record: "5-3".to_string(),
            points_for: 1000.25,
            max_points_for: 0.0,
        };

        let json = serde_json::to_value(&standing).unwrap();
        assert_eq!(json["Manager"], "Jared");
        assert_eq!(json["Points For"], 1000.25);
        assert_eq!(json["Max PF (Potential)"], 0.0);
    }

    #[derive(Clone, Copy)]
    enum Upstream {
        Healthy,
        UsersDown,
        RostersDown,
        RostersMalformed,
    }

    struct LeagueFixture(Upstream);

    fn outage(path: &str) -> SleeperError {
        SleeperError::Status { url: format!("https://api.sleeper.app/v1/{path}"), status: 502 }
    }

    #[async_trait::async_trait]
    impl LeagueApi for LeagueFixture {
        async fn league_users(&self, league_id: &str) -> sleeper_client::Result<Vec<SleeperUser>> {
            match self.0 {
                Upstream::UsersDown => Err(outage(&format!("league/{league_id}/users"))),
                _ => Ok(vec![user("1", "Selkow")]),
            }
        }

        async fn league_rosters(
            &self,
            league_id: &str,
        ) -> sleeper_client::Result<Vec<SleeperRoster>> {
            match self.0 {
                Upstream::RostersDown => Err(outage(&format!("league/{league_id}/rosters"))),
                Upstream::RostersMalformed => {
                    let source = serde_json::from_str::<Vec<SleeperRoster>>(
                        r#"[{"owner_id": "1", "settings": {"wins": 5}}]"#,
                    )
                    .unwrap_err();
                    Err(SleeperError::Malformed { endpoint: "rosters", source })
                }
                _ => Ok(vec![roster(Some("1"), 5, 3, 1000, 25)]),
            }
        }

        async fn nfl_players(&self) -> sleeper_client::Result<BTreeMap<String, SleeperPlayer>> {
            Ok(BTreeMap::new())
        }
    }

    fn fetcher(upstream: Upstream) -> StandingsFetcher {
        let api = Arc::new(LeagueFixture(upstream));
        StandingsFetcher::new(api, "1312559657998368768", Arc::new(aliases()))
    }

    #[tokio::test]
    async fn test_get_standings_from_healthy_league() {
        let standings = fetcher(Upstream::Healthy).get_standings().await;
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].manager, "Jared");
        assert_eq!(standings[0].points_for, 1000.25);
    }

    #[tokio::test]
    async fn test_get_standings_empty_when_either_endpoint_fails() {
        for upstream in [Upstream::UsersDown, Upstream::RostersDown] {
            let fetcher = fetcher(upstream);
            assert_eq!(fetcher.get_standings().await, Vec::<ManagerStanding>::new());

            match fetcher.fetch_standings().await {
                Outcome::Unavailable(reason) => {
                    assert_eq!(reason.kind, FailureKind::UpstreamUnavailable)
                }
                Outcome::Ready(_) => panic!("standings should be unavailable"),
            }
            assert_eq!(fetcher.stats().failures, 2);
        }
    }

    #[tokio::test]
    async fn test_get_standings_empty_on_malformed_rosters() {
        let fetcher = fetcher(Upstream::RostersMalformed);
        assert_eq!(fetcher.get_standings().await, Vec::<ManagerStanding>::new());

        match fetcher.fetch_standings().await {
            Outcome::Unavailable(reason) => {
                assert_eq!(reason.kind, FailureKind::Malformed);
                assert_eq!(reason.source, "standings");
            }
            Outcome::Ready(_) => panic!("malformed rosters should not build standings"),
        }
    }
}
