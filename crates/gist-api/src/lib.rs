//! HTTP client, credentials, and typed gist operations for the gist CLI.
//!
//! The remote snippet service is exposed as five operations over a thin
//! [`client::Client`]: list owned, list starred, fetch by id, create,
//! update, and delete. Credentials are loaded once into an explicit
//! [`credentials::Credentials`] value and presented as HTTP basic auth.

pub mod client;
pub mod credentials;
pub mod errors;
pub mod http;
pub mod models;
pub mod snippets;

pub use client::Client;
pub use credentials::Credentials;
pub use errors::ApiError;
