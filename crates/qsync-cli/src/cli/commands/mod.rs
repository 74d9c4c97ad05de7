//! CLI command handlers, one per file.

mod config;
mod merge;
mod remove;
mod simulate;
mod subjects;

pub use config::run_config;
pub use merge::run_merge;
pub use remove::run_remove;
pub use simulate::run_simulate;
pub use subjects::run_subjects;
