use crate::cli::NamesArgs;
use crate::config::models::OutputFormat;
use crate::config::{CliOverrides, PartialAppConfig};
use crate::error::Result;
use crate::utils::table;
use protkit::AminoAcid;
use std::io::Write;
use tracing::info;

pub fn run<W: Write>(
    args: NamesArgs,
    partial_config: PartialAppConfig,
    set_values: &[String],
    out: &mut W,
) -> Result<()> {
    let overrides = CliOverrides {
        name_mode: args.mode,
        format: args.format,
        ..Default::default()
    };
    let config = partial_config.merge_with_cli(overrides, set_values)?;
    info!(mode = %config.name_mode, format = %config.format, "Listing residue names.");

    match config.format {
        OutputFormat::Text => {
            for name in AminoAcid::all_names(config.name_mode) {
                writeln!(out, "{}", name)?;
            }
        }
        OutputFormat::Csv => {
            let residues = AminoAcid::all().map(|residue| residue.entry());
            table::write_entries(out, residues, config.format)?;
        }
    }
    Ok(())
}
