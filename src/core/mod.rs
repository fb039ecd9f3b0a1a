pub mod clock;
pub mod config;
pub mod input;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use store::{EntryStore, SubscriptionId, group_by_date};
