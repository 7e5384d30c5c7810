//! Error types for option groups

use thiserror::Error;

/// Result type alias for option operations
pub type Result<T> = std::result::Result<T, OptionsError>;

/// Errors that can occur while reading an option group back from parsed matches
#[derive(Debug, Error)]
pub enum OptionsError {
    /// clap could not hand over the values bound to the group
    #[error("failed to read options from matches: {0}")]
    Matches(#[from] clap::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_wraps_clap_error() {
        let err: OptionsError =
            clap::Error::raw(ErrorKind::MissingRequiredArgument, "rekor-url").into();
        let OptionsError::Matches(inner) = &err;
        assert_eq!(inner.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().starts_with("failed to read options from matches"));
    }
}
