use crate::cli::RenderArgs;
use crate::config::{CliOverrides, PartialAppConfig};
use crate::error::{CliError, Result};
use protkit::{AminoAcid, NameMode};
use std::io::Write;
use tracing::info;

pub fn run<W: Write>(
    args: RenderArgs,
    partial_config: PartialAppConfig,
    set_values: &[String],
    out: &mut W,
) -> Result<()> {
    let overrides = CliOverrides {
        name_mode: args.mode,
        separator: args.separator,
        ..Default::default()
    };
    let config = partial_config.merge_with_cli(overrides, set_values)?;

    let residues = parse_sequence(&args.sequence)?;
    info!(
        length = residues.len(),
        gaps = residues.iter().filter(|r| r.is_gap()).count(),
        "Rendering sequence."
    );

    writeln!(
        out,
        "{}",
        render(&residues, config.name_mode, &config.separator)
    )?;
    Ok(())
}

/// Reads every character as a one-letter residue code. Positions are 1-based.
pub fn parse_sequence(sequence: &str) -> Result<Vec<AminoAcid>> {
    let sequence = sequence.trim();
    if sequence.is_empty() {
        return Err(CliError::Argument("Sequence cannot be empty.".to_string()));
    }
    sequence
        .chars()
        .enumerate()
        .map(|(i, c)| {
            AminoAcid::try_from(c).map_err(|source| CliError::Sequence {
                position: i + 1,
                source,
            })
        })
        .collect()
}

pub fn render(residues: &[AminoAcid], mode: NameMode, separator: &str) -> String {
    residues
        .iter()
        .map(|residue| residue.name(mode))
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_render(sequence: &str, mode: Option<NameMode>, separator: Option<&str>) -> String {
        let mut out = Vec::new();
        let args = RenderArgs {
            sequence: sequence.to_string(),
            mode,
            separator: separator.map(str::to_string),
        };
        run(args, PartialAppConfig::default(), &[], &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_three_letter_codes_with_the_default_separator() {
        assert_eq!(
            run_render("MKV-A", Some(NameMode::Medium), None),
            "met lys val gap ala\n"
        );
    }

    #[test]
    fn lowercase_input_is_normalized() {
        assert_eq!(run_render("mkv", None, Some("")), "MKV\n");
    }

    #[test]
    fn renders_long_names_with_a_custom_separator() {
        assert_eq!(
            run_render("BZ", Some(NameMode::Long), Some("; ")),
            "asparagine/aspartic acid; glutamine/glutamic acid\n"
        );
    }

    #[test]
    fn unknown_character_reports_its_position() {
        let err = parse_sequence("MK*V").unwrap_err();
        assert!(matches!(err, CliError::Sequence { position: 3, .. }));
        assert!(err.to_string().contains("position 3"));
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert!(matches!(parse_sequence("  "), Err(CliError::Argument(_))));
    }
}
