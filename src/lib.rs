pub mod cli;
mod command;
pub mod error;
pub mod forge;
pub mod persist;
pub mod pipeline;
pub mod result;

pub use command::{changelog, check};
pub use pipeline::ChangelogPipeline;
