pub mod config;
pub mod exercises;
pub mod session;
