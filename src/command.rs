//! Subcommand implementations.
pub mod changelog;
pub mod check;
