//! CLI library for testing purposes

pub mod args;
pub mod logging;
pub mod report;

pub use args::Args;
pub use stringsheet::{Config, Direction};
