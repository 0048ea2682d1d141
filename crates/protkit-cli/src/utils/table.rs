use crate::config::models::OutputFormat;
use crate::error::Result;
use protkit::ResidueEntry;
use std::io::Write;

const CSV_HEADER: [&str; 4] = ["ordinal", "long", "medium", "short"];

/// Writes catalog rows with all three name forms.
pub fn write_entries<'a, W, I>(out: &mut W, entries: I, format: OutputFormat) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a ResidueEntry>,
{
    match format {
        OutputFormat::Text => {
            for entry in entries {
                writeln!(
                    out,
                    "{:>2}  {:<1}  {:<3}  {}",
                    entry.ordinal(),
                    entry.short(),
                    entry.medium(),
                    entry.long()
                )?;
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(CSV_HEADER)?;
            for entry in entries {
                writer.write_record([
                    entry.ordinal().to_string().as_str(),
                    entry.long(),
                    entry.medium(),
                    entry.short(),
                ])?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
