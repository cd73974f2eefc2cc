use crate::types::{BuildReport, PlayerLookup};
use sleeper_client::SleeperPlayer;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

/// Player Directory - immutable snapshot of full name to player id
///
/// Duplicate full names are resolved last-write-wins while walking the catalog
/// in ascending player-id order, so the colliding entry with the greatest id
/// owns the name. Changing this changes which player links resolve.
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    ids_by_name: HashMap<String, String>,
    report: BuildReport,
}

impl PlayerDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the directory from the bulk player catalog
    ///
    /// Entries missing a first or last name are skipped on purpose; they have
    /// no full name a sheet could match.
    pub fn from_catalog(catalog: &BTreeMap<String, SleeperPlayer>) -> Self {
        let mut ids_by_name = HashMap::with_capacity(catalog.len());
        let mut report = BuildReport { catalog_size: catalog.len(), ..BuildReport::default() };

        for (player_id, player) in catalog {
            let Some(full_name) = player.full_name() else {
                report.skipped += 1;
                continue;
            };

            if let Some(previous) = ids_by_name.insert(full_name, player_id.clone()) {
                report.collisions += 1;
                debug!("Player id {} replaced {} for a shared full name", player_id, previous);
            }
        }

        info!(
            "Built player directory: {} names from {} entries ({} skipped, {} collisions)",
            ids_by_name.len(),
            report.catalog_size,
            report.skipped,
            report.collisions
        );

        Self { ids_by_name, report }
    }

    /// Get the player id for an exact full name
    pub fn get_player_id(&self, full_name: &str) -> Option<&str> {
        self.ids_by_name.get(full_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids_by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids_by_name.is_empty()
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Case-insensitive substring search, sorted by name
    ///
    /// For interactive lookups only. Link annotation uses exact matches.
    pub fn search_players(&self, query: &str) -> Vec<(&str, &str)> {
        let query_lower = query.to_lowercase();
        let mut matches: Vec<(&str, &str)> = self
            .ids_by_name
            .iter()
            .filter(|(name, _)| name.to_lowercase().contains(&query_lower))
            .map(|(name, id)| (name.as_str(), id.as_str()))
            .collect();
        matches.sort_unstable();
        matches
    }
}

impl PlayerLookup for PlayerDirectory {
    fn player_id(&self, full_name: &str) -> Option<&str> {
        self.get_player_id(full_name)
    }
}
