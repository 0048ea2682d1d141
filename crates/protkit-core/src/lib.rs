//! # protkit Core Library
//!
//! Residue identities for protein sequence tooling: the twenty-two proteinogenic
//! amino acids, the four ambiguity codes and the alignment gap, each addressable
//! by its full name, its three-letter code or its one-letter code.
//!
//! ## Architectural Philosophy
//!
//! - **[`core::catalog`]: The Table.** A single static catalog of 27 rows and a
//!   compile-time name index over every name form. Nothing in it is mutable.
//!
//! - **[`core::models`]: The Values.** [`AminoAcid`] is a one-byte `Copy` handle
//!   into the catalog. Equality, ordering and hashing are defined by its
//!   position in the catalog, so values work as map keys and sort
//!   deterministically.
//!
//! ## Quick Start
//!
//! ```
//! use protkit::{AminoAcid, NameMode};
//!
//! let met: AminoAcid = "met".parse().unwrap();
//! assert_eq!(met.name(NameMode::Long), "methionine");
//! assert_eq!(met, AminoAcid::from_name("M").unwrap());
//! assert!(AminoAcid::from_name("-").unwrap().is_gap());
//! ```

pub mod core;

pub use crate::core::catalog::{ResidueCatalog, ResidueEntry};
pub use crate::core::error::ResidueError;
pub use crate::core::models::amino_acid::AminoAcid;
pub use crate::core::models::name_mode::NameMode;
