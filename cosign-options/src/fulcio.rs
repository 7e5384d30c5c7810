//! Fulcio certificate authority options

use clap::Args;
use serde::Serialize;

use crate::interface::AddFlags;

/// Address of the public-good fulcio instance
pub const DEFAULT_FULCIO_URL: &str = "https://fulcio.sigstore.dev";

/// Help text shown for `--fulcio-url`
pub const FULCIO_URL_HELP: &str = "[EXPERIMENTAL] address of sigstore PKI server";

/// Fulcio related options
#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FulcioOptions {
    #[arg(
        id = "fulcio-url",
        long = "fulcio-url",
        value_name = "URL",
        allow_hyphen_values = true,
        overrides_with = "fulcio-url",
        default_value = DEFAULT_FULCIO_URL,
        help = FULCIO_URL_HELP
    )]
    pub url: String,
}

impl FulcioOptions {
    /// Create options pointing at the given fulcio server
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Get the configured fulcio address
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for FulcioOptions {
    fn default() -> Self {
        Self::new(DEFAULT_FULCIO_URL)
    }
}

impl AddFlags for FulcioOptions {}
