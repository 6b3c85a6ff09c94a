// ==========================================
// Система управления логистикой - comparison engine
// ==========================================
// Aligns two stages by join key (wagon number, falling back to row
// id) and classifies each aligned pair. Read-side only; entry order
// is deterministic: source keys in source order, then target-only
// keys in target order. A repeated key keeps its first position and
// the last row with that key wins - the map semantics the frontend
// historically relied on.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::row::{Row, StageData};

/// One aligned pair. `different` is true when either side is absent
/// or both are present with differing statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    pub key: String,
    pub source: Option<Row>,
    pub target: Option<Row>,
    pub different: bool,
}

/// Comparison result with aggregate counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub entries: Vec<ComparisonEntry>,
    pub different_count: usize,
    pub match_count: usize,
}

impl ComparisonReport {
    /// Entries flagged as differing.
    pub fn differing(&self) -> impl Iterator<Item = &ComparisonEntry> {
        self.entries.iter().filter(|entry| entry.different)
    }
}

/// Compare two stages. Pure computation, no mutation.
pub fn compare(source: &StageData, target: &StageData) -> ComparisonReport {
    let (source_order, source_map) = index_by_key(source);
    let (target_order, target_map) = index_by_key(target);

    let mut keys = source_order;
    for key in target_order {
        if !source_map.contains_key(key) {
            keys.push(key);
        }
    }

    let entries: Vec<ComparisonEntry> = keys
        .into_iter()
        .map(|key| {
            let source_row = source_map.get(key).map(|&row| row.clone());
            let target_row = target_map.get(key).map(|&row| row.clone());
            let different = match (&source_row, &target_row) {
                (Some(a), Some(b)) => a.status != b.status,
                _ => true,
            };
            ComparisonEntry {
                key: key.to_string(),
                source: source_row,
                target: target_row,
                different,
            }
        })
        .collect();

    let different_count = entries.iter().filter(|entry| entry.different).count();
    let match_count = entries.len() - different_count;

    ComparisonReport {
        entries,
        different_count,
        match_count,
    }
}

/// Key order (first occurrence) and key → row map (last occurrence
/// wins) for one stage.
fn index_by_key(stage: &StageData) -> (Vec<&str>, HashMap<&str, &Row>) {
    let mut order: Vec<&str> = Vec::new();
    let mut map: HashMap<&str, &Row> = HashMap::new();

    for row in &stage.rows {
        let key = row.join_key();
        if !map.contains_key(key) {
            order.push(key);
        }
        map.insert(key, row);
    }

    (order, map)
}
