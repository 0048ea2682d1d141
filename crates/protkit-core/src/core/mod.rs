//! # Core Module
//!
//! The residue catalog and the value types built on top of it.
//!
//! - **Residue Catalog** ([`catalog`]) - The canonical table of residue names and the name index
//! - **Residue Values** ([`models`]) - `AminoAcid` and the `NameMode` selector
//! - **Errors** ([`error`]) - Failures raised while resolving names and name modes

pub mod catalog;
pub mod error;
pub mod models;
