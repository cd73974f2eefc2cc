//! Player profile links on draft tables

use crate::table::{Cell, Table};
use player_registry::PlayerLookup;
use tracing::debug;

/// Column holding player names in draft sheets
pub const PLAYER_COLUMN: &str = "Player";

/// Host serving player profiles
pub const DEFAULT_PROFILE_BASE_URL: &str = "https://sleeper.app";

/// `<base>/players/<player_id>`
pub fn profile_url(base_url: &str, player_id: &str) -> String {
    format!("{}/players/{}", base_url.trim_end_matches('/'), player_id)
}

/// Turns resolvable player names into profile links
#[derive(Debug, Clone)]
pub struct DraftLinkAnnotator {
    profile_base_url: String,
}

impl Default for DraftLinkAnnotator {
    fn default() -> Self {
        Self::new(DEFAULT_PROFILE_BASE_URL)
    }
}

impl DraftLinkAnnotator {
    pub fn new(profile_base_url: impl Into<String>) -> Self {
        Self { profile_base_url: profile_base_url.into() }
    }

    pub fn profile_url(&self, player_id: &str) -> String {
        profile_url(&self.profile_base_url, player_id)
    }

    /// Link every "Player" cell whose text resolves in `lookup`
    ///
    /// The key is the cell's literal text; spelling differences between the
    /// sheet and the catalog leave the cell plain. Tables without a "Player"
    /// column come back untouched.
    pub fn annotate(&self, mut table: Table, lookup: &impl PlayerLookup) -> Table {
        let mut linked = 0usize;
        let mut unresolved = 0usize;

        let has_player_column = table.map_column(PLAYER_COLUMN, |cell| {
            if matches!(cell, Cell::Empty | Cell::Link { .. }) {
                return cell;
            }
            let name = cell.to_string();
            match lookup.player_id(&name) {
                Some(player_id) => {
                    linked += 1;
                    Cell::Link { url: self.profile_url(player_id), text: name }
                }
                None => {
                    unresolved += 1;
                    cell
                }
            }
        });

        if has_player_column {
            debug!("Linked {} players ({} unresolved)", linked, unresolved);
        }
        table
    }
}

/// [`DraftLinkAnnotator::annotate`] with the default profile host
pub fn annotate(table: Table, lookup: &impl PlayerLookup) -> Table {
    DraftLinkAnnotator::default().annotate(table, lookup)
}
