//! Configuration module
//!
//! Per-invocation settings resolved from the command line.

use cosign_options::EndpointOptions;
use serde::Serialize;

/// CLI configuration
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Service endpoints for this invocation
    #[serde(flatten)]
    pub endpoints: EndpointOptions,
}

impl Config {
    pub fn new(endpoints: EndpointOptions) -> Self {
        Self { endpoints }
    }

    /// Address of the rekor transparency log
    pub fn rekor_url(&self) -> &str {
        self.endpoints.rekor.url()
    }

    /// Address of the fulcio certificate authority
    pub fn fulcio_url(&self) -> &str {
        self.endpoints.fulcio.url()
    }
}
