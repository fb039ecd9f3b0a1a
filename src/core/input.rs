//! Boundary between raw text typed by the user and the entry store.

use crate::core::store::EntryStore;
use crate::models::FitnessEntry;
use tracing::debug;

/// Parse a quantity typed in the input dialog. Anything that is not a
/// non-negative integer yields `None`.
pub fn parse_quantity(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

/// Store `raw` for `kind` if it parses as a quantity. Otherwise nothing is
/// recorded and nothing is reported to the user.
pub fn submit_raw_value(store: &mut EntryStore, kind: &str, raw: &str) -> Option<FitnessEntry> {
    match parse_quantity(raw) {
        Some(value) => Some(store.add_entry(kind, value)),
        None => {
            debug!(kind, raw, "non-numeric quantity ignored");
            None
        }
    }
}
