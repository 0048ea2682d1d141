use crate::cli::LookupArgs;
use crate::config::{CliOverrides, PartialAppConfig};
use crate::error::Result;
use crate::utils::table;
use protkit::{AminoAcid, ResidueEntry};
use std::io::Write;
use tracing::{debug, info};

pub fn run<W: Write>(
    args: LookupArgs,
    partial_config: PartialAppConfig,
    set_values: &[String],
    out: &mut W,
) -> Result<()> {
    let overrides = CliOverrides {
        format: args.format,
        ..Default::default()
    };
    let config = partial_config.merge_with_cli(overrides, set_values)?;
    info!("Resolving {} residue name(s).", args.names.len());

    let entries = args
        .names
        .iter()
        .map(|name| -> Result<&'static ResidueEntry> {
            let residue = AminoAcid::from_name(name)?;
            debug!(name = %name, residue = ?residue, "Resolved residue name.");
            Ok(residue.entry())
        })
        .collect::<Result<Vec<_>>>()?;

    table::write_entries(out, entries, config.format)
}
