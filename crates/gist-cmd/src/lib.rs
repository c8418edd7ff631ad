//! Command planning, resolution, and operations for the gist CLI.
//!
//! One module per operation; [`cli::Cli::plan`] turns parsed flags into
//! exactly one [`cli::Operation`] before anything touches the network.

pub mod cli;
pub mod create;
pub mod delete;
pub mod factory;
pub mod list;
pub mod resolve;
pub mod show;
pub mod update;

#[cfg(test)]
pub mod test_helpers;
