pub mod colors;
pub mod date;
pub mod formatting;
pub mod logging;
pub mod path;

pub use formatting::{pad_right, rule, titlecase};
