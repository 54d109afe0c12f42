use std::ffi::OsString;
use std::io::Write;

use clap::Parser;

use crate::core::{EchoReport, Result};

use super::Cli;

/// Parses `args` (program name first) and writes the echo report to `out`.
///
/// Nothing is written when parsing fails.
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = Cli::try_parse_from(args)?;

    tracing::debug!(
        model = %cli.model,
        prompt_len = cli.prompt.len(),
        "Parsed agent arguments"
    );
    if !cli.ignored.is_empty() {
        tracing::debug!("Ignoring {} trailing argument(s)", cli.ignored.len());
    }

    let report = EchoReport::from(&cli);
    report.write_to(out)?;
    out.flush()?;

    tracing::debug!("Echo report written");
    Ok(())
}
