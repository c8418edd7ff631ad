//! Terminal I/O, error types, and text utilities for the gist CLI.
//!
//! This crate provides the plumbing shared by the other gist crates:
//! - [`IOStreams`] for capturable terminal output
//! - usage-class error types consumed by the binary's exit-code mapping
//! - small text helpers for the fixed output format

pub mod cmdutil;
pub mod iostreams;
pub mod text;

pub use iostreams::IOStreams;
