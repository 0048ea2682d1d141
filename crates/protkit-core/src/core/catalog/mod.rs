//! # Residue Catalog Module
//!
//! The canonical, read-only table of residue names.
//!
//! ## Overview
//!
//! The catalog holds 27 rows: the gap at ordinal 0, the twenty standard amino
//! acids, the ambiguity codes `B`, `Z` and `J`, the non-standard amino acids
//! selenocysteine and pyrrolysine, and the catch-all `X`. Each row carries
//! three names, selected by [`NameMode`]:
//!
//! - **Long** - the full chemical name (`"aspartic acid"`)
//! - **Medium** - the lowercase three-letter code (`"asp"`)
//! - **Short** - the uppercase one-letter code (`"D"`)
//!
//! A row's ordinal is its position in the table. The ordinal is the identity of
//! a residue and also defines its sort order.
//!
//! ## Name Index
//!
//! All 81 names are keys of one compile-time perfect-hash map. Lookups through
//! [`ResidueCatalog::resolve`] are exact: callers normalize case first (see
//! [`AminoAcid::from_name`](crate::AminoAcid::from_name)).

mod table;

use crate::core::error::ResidueError;
use crate::core::models::name_mode::NameMode;
use phf::Map;
use tracing::trace;

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResidueEntry {
    ordinal: u8,
    long: &'static str,
    medium: &'static str,
    short: &'static str,
}

impl ResidueEntry {
    const fn new(
        ordinal: u8,
        long: &'static str,
        medium: &'static str,
        short: &'static str,
    ) -> Self {
        Self {
            ordinal,
            long,
            medium,
            short,
        }
    }

    pub fn ordinal(&self) -> u8 {
        self.ordinal
    }

    pub fn long(&self) -> &'static str {
        self.long
    }

    pub fn medium(&self) -> &'static str {
        self.medium
    }

    pub fn short(&self) -> &'static str {
        self.short
    }

    pub fn name(&self, mode: NameMode) -> &'static str {
        match mode {
            NameMode::Long => self.long,
            NameMode::Medium => self.medium,
            NameMode::Short => self.short,
        }
    }

    pub fn is_gap(&self) -> bool {
        self.ordinal == ResidueCatalog::GAP_ORDINAL
    }
}

#[derive(Debug)]
pub struct ResidueCatalog {
    entries: &'static [ResidueEntry],
    index: &'static Map<&'static str, u8>,
}

static STANDARD: ResidueCatalog = ResidueCatalog {
    entries: &table::RESIDUE_TABLE,
    index: &table::NAME_INDEX,
};

impl ResidueCatalog {
    pub const GAP_ORDINAL: u8 = 0;

    /// The process-wide catalog.
    pub fn standard() -> &'static ResidueCatalog {
        &STANDARD
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All rows in ordinal order, gap included.
    pub fn entries(&self) -> &'static [ResidueEntry] {
        self.entries
    }

    pub fn get(&self, ordinal: u8) -> Option<&'static ResidueEntry> {
        self.entries.get(ordinal as usize)
    }

    /// Looks `name` up verbatim in every name form.
    pub fn resolve(&self, name: &str) -> Result<u8, ResidueError> {
        match self.index.get(name) {
            Some(&ordinal) => Ok(ordinal),
            None => {
                trace!(name, "Residue name not found in catalog.");
                Err(ResidueError::unknown_name(name))
            }
        }
    }

    pub fn resolve_entry(&self, name: &str) -> Result<&'static ResidueEntry, ResidueError> {
        let ordinal = self.resolve(name)?;
        Ok(&self.entries[ordinal as usize])
    }

    pub fn name_of(&self, ordinal: u8, mode: NameMode) -> Option<&'static str> {
        self.get(ordinal).map(|entry| entry.name(mode))
    }

    /// Names of every non-gap row, in catalog order.
    ///
    /// The returned iterator is cheap to clone, so it can be walked more than once.
    pub fn all_names(
        &self,
        mode: NameMode,
    ) -> impl ExactSizeIterator<Item = &'static str> + Clone {
        let residues = self.entries.get(1..).unwrap_or_default();
        residues.iter().map(move |entry| entry.name(mode))
    }
}
