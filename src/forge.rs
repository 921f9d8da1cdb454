//! Remote issue-tracker access: configuration, the [`traits::Forge`]
//! seam, and the GitHub implementation.
pub mod config;
pub mod github;
mod link;
pub mod request;
pub mod traits;
