//! Composed endpoint options
//!
//! Groups every service address a signing or verification command needs, so a
//! command registers all of them with a single [`AddFlags::add_flags`] call.

use clap::Args;
use serde::Serialize;

use crate::fulcio::FulcioOptions;
use crate::interface::AddFlags;
use crate::rekor::RekorOptions;

/// Service endpoints used by a single command invocation
#[derive(Args, Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EndpointOptions {
    #[command(flatten)]
    pub rekor: RekorOptions,

    #[command(flatten)]
    pub fulcio: FulcioOptions,
}

impl AddFlags for EndpointOptions {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_FULCIO_URL, DEFAULT_REKOR_URL};
    use clap::Command;

    fn command() -> Command {
        EndpointOptions::add_flags(Command::new("cosign"))
    }

    #[test]
    fn test_registers_every_group() {
        let cmd = command();
        let ids: Vec<_> = cmd.get_arguments().map(|arg| arg.get_id().as_str()).collect();
        assert!(ids.contains(&"rekor-url"));
        assert!(ids.contains(&"fulcio-url"));
    }

    #[test]
    fn test_defaults() {
        let matches = command().try_get_matches_from(["cosign"]).unwrap();
        let opts = EndpointOptions::from_matches(&matches).unwrap();

        assert_eq!(opts, EndpointOptions::default());
        assert_eq!(opts.rekor.url(), DEFAULT_REKOR_URL);
        assert_eq!(opts.fulcio.url(), DEFAULT_FULCIO_URL);
    }

    #[test]
    fn test_groups_do_not_share_values() {
        let matches = command()
            .try_get_matches_from(["cosign", "--rekor-url", "https://rekor.example.com"])
            .unwrap();
        let opts = EndpointOptions::from_matches(&matches).unwrap();

        assert_eq!(opts.rekor.url(), "https://rekor.example.com");
        assert_eq!(opts.fulcio.url(), DEFAULT_FULCIO_URL);
    }

    #[test]
    fn test_each_group_reads_from_composed_command() {
        let matches = command()
            .try_get_matches_from([
                "cosign",
                "--fulcio-url",
                "https://fulcio.example.com",
                "--rekor-url",
                "https://rekor.example.com",
            ])
            .unwrap();

        let rekor = RekorOptions::from_matches(&matches).unwrap();
        let fulcio = FulcioOptions::from_matches(&matches).unwrap();
        assert_eq!(rekor.url(), "https://rekor.example.com");
        assert_eq!(fulcio.url(), "https://fulcio.example.com");
    }

    #[test]
    fn test_serializes_nested_urls() {
        let opts = EndpointOptions {
            rekor: RekorOptions::new("https://rekor.example.com"),
            fulcio: FulcioOptions::default(),
        };
        let json = serde_json::to_value(&opts).unwrap();

        assert_eq!(json["rekor"]["url"], "https://rekor.example.com");
        assert_eq!(json["fulcio"]["url"], DEFAULT_FULCIO_URL);
    }
}
