//! Writing results to stdout
//!
//! Nothing but eval-able text goes to stdout; diagnostics and logs use stderr.

use anyhow::{Context, Result};
use awsenv_core::{EnvVarNames, Profile};
use std::io::Write;

/// Write the profile's assignments followed by a newline
pub fn write_profile<W: Write>(
    out: &mut W,
    profile: &Profile,
    names: &EnvVarNames,
    export: bool,
) -> Result<()> {
    writeln!(out, "{}", profile.format_with(names, export))
        .context("Failed to write credentials to stdout")?;
    out.flush().context("Failed to flush stdout")
}

/// Write profile names, one per line
pub fn write_names<W: Write>(out: &mut W, names: &[&str]) -> Result<()> {
    for name in names {
        writeln!(out, "{}", name).context("Failed to write profile list to stdout")?;
    }
    out.flush().context("Failed to flush stdout")
}
