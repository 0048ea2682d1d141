//! # Core Models Module
//!
//! Value types exposed to sequence and alignment tooling.
//!
//! - [`amino_acid`] - A single residue identity (amino acid, ambiguity code or gap)
//! - [`name_mode`] - Selector for the long, three-letter or one-letter name form
//!
//! ## Usage
//!
//! ```
//! use protkit::core::models::{amino_acid::AminoAcid, name_mode::NameMode};
//!
//! let residues: Vec<AminoAcid> = "MKV-"
//!     .chars()
//!     .map(AminoAcid::try_from)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(residues[1].name(NameMode::Medium), "lys");
//! assert!(residues[3].is_gap());
//! ```

pub mod amino_acid;
pub mod name_mode;
