//! Config command handlers
//!
//! Reports the endpoints an invocation resolved to.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;

use crate::config::Config;

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the resolved endpoints
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Handle config commands
pub fn handle_config_command(command: ConfigCommands, config: &Config) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            if json {
                println!("{}", render_json(config)?);
            } else {
                print_config(config);
            }
            Ok(())
        }
    }
}

fn render_json(config: &Config) -> Result<String> {
    serde_json::to_string_pretty(config).context("Failed to serialize configuration")
}

/// Print the endpoints in human readable form
fn print_config(config: &Config) {
    println!("{}", "Endpoints:".bold());
    println!("  Rekor:   {}", display_url(config.rekor_url()));
    println!("  Fulcio:  {}", display_url(config.fulcio_url()));
}

fn display_url(url: &str) -> ColoredString {
    if url.is_empty() {
        "(empty)".yellow()
    } else {
        url.cyan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosign_options::{EndpointOptions, FulcioOptions, RekorOptions};

    #[test]
    fn test_render_json() {
        let config = Config::new(EndpointOptions {
            rekor: RekorOptions::new("https://rekor.example.com"),
            fulcio: FulcioOptions::new("https://fulcio.example.com"),
        });

        let rendered = render_json(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "rekor": { "url": "https://rekor.example.com" },
                "fulcio": { "url": "https://fulcio.example.com" },
            })
        );
    }

    #[test]
    fn test_empty_url_is_flagged_in_text_output() {
        colored::control::set_override(false);
        assert_eq!(display_url("").to_string(), "(empty)");
        assert_eq!(
            display_url("https://rekor.example.com").to_string(),
            "https://rekor.example.com"
        );
    }
}
