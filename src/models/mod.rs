pub mod entry;
pub mod exercise;

pub use entry::{FitnessEntry, GroupedEntries};
pub use exercise::{CALORIE_INTAKE, Catalogue, Unit};
