use crate::core::clock::{Clock, SystemClock};
use crate::models::{FitnessEntry, GroupedEntries};
use crate::utils::date::format_timestamp;
use std::sync::Arc;
use tracing::debug;

/// Callback invoked with the new grouped snapshot after every append.
pub type Subscriber = Box<dyn FnMut(&Arc<GroupedEntries>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Bucket entries by their date key, keeping first-occurrence key order
/// and insertion order inside each bucket.
pub fn group_by_date(entries: &[FitnessEntry]) -> GroupedEntries {
    let mut grouped = GroupedEntries::new();
    for entry in entries {
        grouped
            .entry(entry.date_key().to_string())
            .or_default()
            .push(entry.clone());
    }
    grouped
}

/// In-memory, append-only log of the session's entries.
///
/// The store owns its entries for the lifetime of the session; nothing is
/// written to disk. Every append replaces the published snapshot with a new
/// `Arc<GroupedEntries>`, so a subscriber holding an older snapshot never
/// observes a half-applied change.
pub struct EntryStore {
    entries: Vec<FitnessEntry>,
    snapshot: Arc<GroupedEntries>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    clock: Box<dyn Clock>,
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryStore {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            entries: Vec::new(),
            snapshot: Arc::new(GroupedEntries::new()),
            subscribers: Vec::new(),
            next_subscription: 0,
            clock: Box::new(clock),
        }
    }

    /// Record a new entry stamped with the clock's current local time.
    /// The id is the number of entries already stored plus one.
    pub fn add_entry(&mut self, kind: &str, value: u32) -> FitnessEntry {
        let id = self.entries.len() as u32 + 1;
        let entry = FitnessEntry::new(id, kind, value, format_timestamp(self.clock.now()));

        self.entries.push(entry.clone());
        debug!(id, kind, value, date = %entry.date, "entry added");

        self.publish();
        entry
    }

    /// Fresh grouping of every stored entry.
    pub fn grouped_by_date(&self) -> GroupedEntries {
        group_by_date(&self.entries)
    }

    /// Last published snapshot (empty before the first append).
    pub fn snapshot(&self) -> Arc<GroupedEntries> {
        Arc::clone(&self.snapshot)
    }

    pub fn entries(&self) -> &[FitnessEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&Arc<GroupedEntries>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        let callback: Subscriber = Box::new(callback);
        self.subscribers.push((id, callback));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn publish(&mut self) {
        self.snapshot = Arc::new(self.grouped_by_date());
        debug!(
            days = self.snapshot.len(),
            subscribers = self.subscribers.len(),
            "publishing snapshot"
        );
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&self.snapshot);
        }
    }
}
