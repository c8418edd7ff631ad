//! gist - command-line client for GitHub gists.
//!
//! Lists, shows, creates, updates, and deletes gists. One operation per
//! invocation, selected from the flag combination before any credential
//! read or network access.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gist_cmd::cli::Cli;
use gist_cmd::factory::Factory;
use gist_core::cmdutil::is_usage_error;
use gist_core::ios_eprintln;

/// Process exit codes.
mod exit_codes {
    /// Success.
    pub const OK: i32 = 0;
    /// Usage or validation failure: conflicting flags, multiple
    /// references, unreadable stdin.
    pub const USAGE: i32 = 1;
    /// Configuration or remote failure: missing credentials, not-found,
    /// unauthorized, transport errors.
    pub const REMOTE: i32 = 2;
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("GIST_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let factory = Factory::new(env!("CARGO_PKG_VERSION").to_string());

    let exit_code = match run(&cli, &factory).await {
        Ok(()) => exit_codes::OK,
        Err(e) if is_usage_error(&e) => {
            ios_eprintln!(&factory.io, "{e:#}");
            ios_eprintln!(&factory.io, "see `gist --help` for usage");
            exit_codes::USAGE
        }
        Err(e) => {
            ios_eprintln!(&factory.io, "{e:#}");
            exit_codes::REMOTE
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: &Cli, factory: &Factory) -> anyhow::Result<()> {
    let operation = cli.plan()?;
    operation.run(factory).await
}
