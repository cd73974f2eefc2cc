use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name to player id resolution
pub trait PlayerLookup {
    /// Exact-match lookup on the full name; no fuzzy matching
    fn player_id(&self, full_name: &str) -> Option<&str>;
}

impl PlayerLookup for HashMap<String, String> {
    fn player_id(&self, full_name: &str) -> Option<&str> {
        self.get(full_name).map(String::as_str)
    }
}

/// Summary of one directory build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Catalog entries read
    pub catalog_size: usize,

    /// Entries without a first or last name
    pub skipped: usize,

    /// Inserts that replaced an earlier id for the same full name
    pub collisions: usize,
}
