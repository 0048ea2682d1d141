use crate::config::models::OutputFormat;
use clap::{Args, Parser, Subcommand};
use protkit::NameMode;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "protkit contributors",
    version,
    about = "protkit CLI - Resolve, list and render amino acid residue names in their long, three-letter and one-letter forms.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S display.name-mode=long
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every known residue (the gap excluded) in catalog order.
    Names(NamesArgs),
    /// Resolve residue names and show all three forms of each.
    Lookup(LookupArgs),
    /// Render a one-letter residue string in another name form.
    Render(RenderArgs),
}

/// Arguments for the `names` subcommand.
#[derive(Args, Debug)]
pub struct NamesArgs {
    /// Name form to list: long, medium or short.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<NameMode>,

    /// Output format.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `lookup` subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Residue names in any form (e.g. 'M', 'met', 'methionine').
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// One-letter residue string; '-' marks a gap (e.g. 'MKV-A').
    #[arg(required = true, value_name = "SEQUENCE")]
    pub sequence: String,

    /// Name form to render: long, medium or short.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<NameMode>,

    /// Separator placed between rendered residues.
    #[arg(short = 'd', long, value_name = "STRING")]
    pub separator: Option<String>,
}
