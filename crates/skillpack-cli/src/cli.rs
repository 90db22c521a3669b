//! CLI argument parsing using clap.

use clap::ArgAction;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use clap::builder::BoolishValueParser;
use skillpack_core::SourceType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillpack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a skill directory or zip package
    Validate(ValidateArgs),
    /// Pack a skill directory into a zip package
    Pack(PackArgs),
    /// Unpack a zip package into a directory
    Unpack(UnpackArgs),
}

impl Commands {
    /// Operation name used in JSON output.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Validate(_) => "validate",
            Self::Pack(_) => "pack",
            Self::Unpack(_) => "unpack",
        }
    }
}

#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the skill directory or zip package
    #[arg(value_name = "SKILL_PATH")]
    pub skill_path: PathBuf,

    /// How to treat SKILL_PATH
    #[arg(long, value_enum, default_value_t = SourceTypeArg::Auto)]
    pub source_type: SourceTypeArg,

    /// Whether runner.json must declare a version
    #[arg(
        long,
        value_name = "BOOL",
        default_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub require_version: bool,
}

#[derive(clap::Args)]
pub struct PackArgs {
    /// Skill directory to pack
    #[arg(value_name = "SOURCE_DIR")]
    pub source_dir: PathBuf,

    /// Output zip file path
    #[arg(value_name = "OUTPUT_ZIP")]
    pub output_zip: PathBuf,

    /// Top-level directory name inside the zip (default: SOURCE_DIR name)
    #[arg(long, value_name = "NAME")]
    pub top_level_name: Option<String>,
}

#[derive(clap::Args)]
pub struct UnpackArgs {
    /// Path to the zip package
    #[arg(value_name = "ZIP")]
    pub zip: PathBuf,

    /// Destination directory (replaced if it exists)
    #[arg(value_name = "DEST_DIR")]
    pub dest_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceTypeArg {
    Auto,
    Directory,
    Zip,
}

impl From<SourceTypeArg> for SourceType {
    fn from(arg: SourceTypeArg) -> Self {
        match arg {
            SourceTypeArg::Auto => Self::Auto,
            SourceTypeArg::Directory => Self::Directory,
            SourceTypeArg::Zip => Self::Zip,
        }
    }
}
