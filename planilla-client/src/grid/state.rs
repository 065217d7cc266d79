//! Persisted grid UI state, one entry per table

use std::collections::BTreeMap;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix of every persisted grid-state key
pub const STATE_KEY_PREFIX: &str = "DataTables_state";

/// Storage key for one table's UI state
pub fn state_key(table_id: &str) -> String {
    format!("{}:{}", STATE_KEY_PREFIX, table_id)
}

/// Sort direction of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Filters, sort and paging a user left a table in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridState {
    #[serde(default)]
    pub start: u64,
    #[serde(default)]
    pub length: u64,
    #[serde(default)]
    pub search: String,
    /// `(column index, direction)` pairs in priority order
    #[serde(default)]
    pub order: Vec<(usize, SortDirection)>,
    /// Search-pane selections by column index
    #[serde(default, rename = "searchPanes")]
    pub search_panes: BTreeMap<usize, Vec<Value>>,
}

/// Grid state store keyed by table id
#[derive(Debug, Default)]
pub struct GridStateStore {
    entries: DashMap<String, GridState>,
}

impl GridStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&self, table_id: &str, state: GridState) {
        tracing::trace!(key = %state_key(table_id), "Grid state saved");
        self.entries.insert(state_key(table_id), state);
    }

    pub fn load(&self, table_id: &str) -> Option<GridState> {
        self.entries
            .get(&state_key(table_id))
            .map(|entry| entry.value().clone())
    }

    pub fn clear(&self, table_id: &str) -> Option<GridState> {
        self.entries
            .remove(&state_key(table_id))
            .map(|(_, state)| state)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
