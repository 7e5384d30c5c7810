//! Rekor transparency-log options
//!
//! Holds the address of the rekor server that signatures are recorded in and
//! checked against. The value is passed through verbatim; whatever client talks
//! to rekor is responsible for rejecting an address it cannot use.

use clap::Args;
use serde::Serialize;

use crate::interface::AddFlags;

/// Address of the public-good rekor instance
pub const DEFAULT_REKOR_URL: &str = "https://rekor.sigstore.dev";

/// Help text shown for `--rekor-url`
pub const REKOR_URL_HELP: &str = "[EXPERIMENTAL] address of rekor STL server";

/// Rekor related options
#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RekorOptions {
    #[arg(
        id = "rekor-url",
        long = "rekor-url",
        value_name = "URL",
        allow_hyphen_values = true,
        overrides_with = "rekor-url",
        default_value = DEFAULT_REKOR_URL,
        help = REKOR_URL_HELP
    )]
    pub url: String,
}

impl RekorOptions {
    /// Create options pointing at the given rekor server
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Get the configured rekor address
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for RekorOptions {
    fn default() -> Self {
        Self::new(DEFAULT_REKOR_URL)
    }
}

impl AddFlags for RekorOptions {}
