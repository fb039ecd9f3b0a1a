use super::exercise::Unit;
use crate::utils::date;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Entries bucketed by date key ("YYYY-MM-DD").
/// Keys keep the order of their first occurrence, buckets keep insertion order.
pub type GroupedEntries = IndexMap<String, Vec<FitnessEntry>>;

/// One logged activity. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessEntry {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String, // free-form label: "Push-ups", "Calorie Intake", ...
    pub value: u32,
    pub date: String, // "YYYY-MM-DD HH:MM:SS", local time
}

impl FitnessEntry {
    pub fn new(id: u32, kind: &str, value: u32, date: String) -> Self {
        Self {
            id,
            kind: kind.to_string(),
            value,
            date,
        }
    }

    /// Grouping key: everything before the first space of `date`.
    pub fn date_key(&self) -> &str {
        date::date_key(&self.date)
    }

    /// Time-of-day part of the timestamp ("" if the timestamp has none).
    pub fn time_str(&self) -> &str {
        self.date
            .split_once(' ')
            .map(|(_, time)| time)
            .unwrap_or("")
    }

    pub fn unit(&self) -> Unit {
        Unit::for_kind(&self.kind)
    }

    /// "500 calories", "10 reps"
    pub fn value_with_unit(&self) -> String {
        format!("{} {}", self.value, self.unit().as_str())
    }
}
