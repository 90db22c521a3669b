//! Pack command implementation.

use crate::cli::PackArgs;
use crate::error::add_package_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use skillpack_core::pack_directory;
use tracing::debug;

pub fn execute(args: &PackArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    debug!(
        source = %args.source_dir.display(),
        output = %args.output_zip.display(),
        "packing directory"
    );

    let report = add_package_context(
        pack_directory(
            &args.source_dir,
            &args.output_zip,
            args.top_level_name.as_deref(),
        ),
        &args.source_dir,
    )?;

    formatter.format_pack_result(&report)
}
