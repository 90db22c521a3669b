//! Validate command implementation.

use crate::cli::ValidateArgs;
use crate::error::add_package_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use skillpack_core::ValidatorConfig;
use skillpack_core::validate_path;
use tracing::debug;

pub fn execute(args: &ValidateArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = ValidatorConfig::default().with_require_version(args.require_version);
    debug!(
        path = %args.skill_path.display(),
        source_type = ?args.source_type,
        require_version = args.require_version,
        "validating package"
    );

    let report = add_package_context(
        validate_path(&args.skill_path, args.source_type.into(), &config),
        &args.skill_path,
    )?;

    formatter.format_validation_result(&args.skill_path, &report)
}
