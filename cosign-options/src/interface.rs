//! Flag registration capability shared by all option groups

use clap::{ArgMatches, Args, Command, FromArgMatches};

use crate::error::Result;

/// An option group that can register its flags on a command
///
/// Implementors are clap [`Args`] groups, so opting in is an empty `impl`.
/// A composed command registers any number of groups by chaining
/// [`AddFlags::add_flags`] calls, then reads each group back with
/// [`AddFlags::from_matches`] once the arguments have been parsed.
pub trait AddFlags: Args + FromArgMatches + Sized {
    /// Register this group's flags on `cmd`
    ///
    /// Only the flag definitions are added here; the group's values are not
    /// touched until the matches are read.
    fn add_flags(cmd: Command) -> Command {
        Self::augment_args(cmd)
    }

    /// Build the group from parsed matches
    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        Ok(Self::from_arg_matches(matches)?)
    }

    /// Overwrite an existing instance with the parsed values
    fn apply_matches(&mut self, matches: &ArgMatches) -> Result<()> {
        self.update_from_arg_matches(matches)?;
        Ok(())
    }
}
