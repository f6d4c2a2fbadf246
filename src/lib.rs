pub mod config;
pub mod discover;
pub mod pipeline;
pub mod process;
pub mod write;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use pipeline::{run, RunOutcome, RunSummary};
