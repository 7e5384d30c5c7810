//! Cosign command-line options
//!
//! Option groups that a cosign front end registers on its commands. Each group
//! owns the values it binds, fills them with compiled-in defaults, and is read
//! back from the parsed matches once clap has processed the process arguments.
//!
//! # Example
//!
//! ```
//! use clap::Command;
//! use cosign_options::{AddFlags, RekorOptions};
//!
//! let cmd = RekorOptions::add_flags(Command::new("cosign"));
//! let matches = cmd
//!     .try_get_matches_from(["cosign", "--rekor-url", "https://rekor.example.com"])
//!     .unwrap();
//!
//! let rekor = RekorOptions::from_matches(&matches).unwrap();
//! assert_eq!(rekor.url(), "https://rekor.example.com");
//! ```

pub mod endpoints;
pub mod error;
pub mod fulcio;
pub mod interface;
pub mod rekor;

// Re-export commonly used types
pub use endpoints::EndpointOptions;
pub use error::{OptionsError, Result};
pub use fulcio::{DEFAULT_FULCIO_URL, FulcioOptions};
pub use interface::AddFlags;
pub use rekor::{DEFAULT_REKOR_URL, RekorOptions};
