//! Cosign CLI
//!
//! Command-line front end that resolves the service endpoints for an
//! invocation and hands them to the selected command.

mod commands;
mod config;

use anyhow::Result;
use clap::{ArgMatches, Command, CommandFactory, FromArgMatches, Parser};
use commands::{Commands, handle_command};
use config::Config;
use cosign_options::{AddFlags, EndpointOptions};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cosign")]
#[command(about = "Container signing and verification", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Build the root command with the endpoint flags registered on the commands that use them
fn command() -> Command {
    Cli::command().mut_subcommand("config", |config| {
        config.mut_subcommand("show", EndpointOptions::add_flags)
    })
}

/// Matches of the innermost subcommand that was invoked
fn leaf_matches(matches: &ArgMatches) -> &ArgMatches {
    match matches.subcommand() {
        Some((_, sub)) => leaf_matches(sub),
        None => matches,
    }
}

/// Split parsed matches into the selected command and its configuration
fn resolve(matches: &ArgMatches) -> Result<(Commands, Config)> {
    let cli = Cli::from_arg_matches(matches)?;
    let endpoints = EndpointOptions::from_matches(leaf_matches(matches))?;
    Ok((cli.command, Config::new(endpoints)))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cosign=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = command().get_matches();
    let (command, config) = resolve(&matches)?;
    debug!(
        rekor_url = %config.rekor_url(),
        fulcio_url = %config.fulcio_url(),
        "resolved endpoints"
    );

    handle_command(command, &config)
}
