// src/export/model.rs

use crate::models::FitnessEntry;
use serde::Serialize;

/// Flat export row for one entry.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EntryExport {
    pub id: u32,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: u32,
    pub unit: String,
}

impl From<&FitnessEntry> for EntryExport {
    fn from(e: &FitnessEntry) -> Self {
        Self {
            id: e.id,
            date: e.date_key().to_string(),
            time: e.time_str().to_string(),
            kind: e.kind.clone(),
            value: e.value,
            unit: e.unit().as_str().to_string(),
        }
    }
}

pub(crate) fn entries_to_rows(entries: &[FitnessEntry]) -> Vec<EntryExport> {
    entries.iter().map(EntryExport::from).collect()
}
