//! Unpack command implementation.

use crate::cli::UnpackArgs;
use crate::error::add_package_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use skillpack_core::ValidatorConfig;
use skillpack_core::unpack_archive;
use tracing::debug;

pub fn execute(args: &UnpackArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = ValidatorConfig::default();
    debug!(zip = %args.zip.display(), dest = %args.dest_dir.display(), "unpacking package");

    let report = add_package_context(
        unpack_archive(&args.zip, &args.dest_dir, &config),
        &args.zip,
    )?;

    formatter.format_unpack_result(&report)
}
