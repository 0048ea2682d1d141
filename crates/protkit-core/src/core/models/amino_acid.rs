use super::name_mode::NameMode;
use crate::core::catalog::{ResidueCatalog, ResidueEntry};
use crate::core::error::ResidueError;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// One residue of a protein sequence: an amino acid, an ambiguity code or a gap.
///
/// The value is an ordinal into [`ResidueCatalog::standard`]. Two values are
/// equal when they name the same catalog row, whichever name form they were
/// built from, and they sort by catalog position.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AminoAcid(u8);

impl AminoAcid {
    pub const GAP: AminoAcid = AminoAcid(ResidueCatalog::GAP_ORDINAL);

    /// Resolves any of the three name forms.
    ///
    /// A single character is uppercased before lookup (`"m"` → `"M"`); longer
    /// names are lowercased (`"Met"` → `"met"`, `"Aspartic Acid"` →
    /// `"aspartic acid"`).
    pub fn from_name(name: &str) -> Result<Self, ResidueError> {
        let mut chars = name.chars();
        let normalized = match (chars.next(), chars.next()) {
            (Some(_), None) => name.to_uppercase(),
            _ => name.to_lowercase(),
        };

        ResidueCatalog::standard()
            .resolve(&normalized)
            .map(AminoAcid)
            .inspect_err(|_| debug!(name, "Rejected unknown residue name."))
    }

    /// Resolves a name token given as raw bytes, e.g. a field sliced out of a
    /// sequence record.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, ResidueError> {
        let name = std::str::from_utf8(bytes).map_err(|e| ResidueError::InvalidArgumentType {
            expected: "a UTF-8 residue name",
            found: format!("invalid UTF-8 bytes ({})", e),
        })?;
        Self::from_name(name)
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        ResidueCatalog::standard()
            .get(ordinal)
            .map(|entry| AminoAcid(entry.ordinal()))
    }

    pub fn ordinal(&self) -> u8 {
        self.0
    }

    pub fn entry(&self) -> &'static ResidueEntry {
        &ResidueCatalog::standard().entries()[self.0 as usize]
    }

    pub fn name(&self, mode: NameMode) -> &'static str {
        self.entry().name(mode)
    }

    /// Like [`name`](Self::name), with the mode given as `"long"`, `"medium"` or `"short"`.
    pub fn name_str(&self, mode: &str) -> Result<&'static str, ResidueError> {
        Ok(self.name(mode.parse()?))
    }

    pub fn is_gap(&self) -> bool {
        self.0 == ResidueCatalog::GAP_ORDINAL
    }

    /// Names of every residue except the gap, in catalog order.
    pub fn all_names(mode: NameMode) -> impl ExactSizeIterator<Item = &'static str> + Clone {
        ResidueCatalog::standard().all_names(mode)
    }

    /// Every residue except the gap, in catalog order.
    pub fn all() -> impl ExactSizeIterator<Item = AminoAcid> + Clone {
        let residues = ResidueCatalog::standard()
            .entries()
            .get(1..)
            .unwrap_or_default();
        residues.iter().map(|entry| AminoAcid(entry.ordinal()))
    }
}

impl FromStr for AminoAcid {
    type Err = ResidueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<&str> for AminoAcid {
    type Error = ResidueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_name(value)
    }
}

impl TryFrom<char> for AminoAcid {
    type Error = ResidueError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let mut buf = [0u8; 4];
        Self::from_name(value.encode_utf8(&mut buf))
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(NameMode::Short))
    }
}

impl fmt::Debug for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AminoAcid")
            .field(&self.name(NameMode::Short))
            .finish()
    }
}

impl Serialize for AminoAcid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name(NameMode::Short))
    }
}

struct AminoAcidVisitor;

impl AminoAcidVisitor {
    fn invalid_argument<E: de::Error>(found: impl fmt::Display) -> E {
        E::custom(ResidueError::InvalidArgumentType {
            expected: "a residue name string",
            found: found.to_string(),
        })
    }
}

impl<'de> Visitor<'de> for AminoAcidVisitor {
    type Value = AminoAcid;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a residue name such as \"A\", \"ala\" or \"alanine\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        AminoAcid::from_name(v).map_err(E::custom)
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<Self::Value, E> {
        AminoAcid::try_from(v).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        AminoAcid::from_utf8(v).map_err(E::custom)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Err(Self::invalid_argument(format_args!("boolean `{}`", v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Err(Self::invalid_argument(format_args!("integer `{}`", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Err(Self::invalid_argument(format_args!("integer `{}`", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Err(Self::invalid_argument(format_args!("float `{}`", v)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(Self::invalid_argument("unit value"))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(Self::invalid_argument("missing value"))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<Self::Value, A::Error> {
        Err(Self::invalid_argument("sequence"))
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<Self::Value, A::Error> {
        Err(Self::invalid_argument("map"))
    }
}

impl<'de> Deserialize<'de> for AminoAcid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(AminoAcidVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn aa(name: &str) -> AminoAcid {
        AminoAcid::from_name(name).unwrap()
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn single_character_names_are_uppercased() {
        assert_eq!(aa("a"), aa("A"));
        assert_eq!(aa("m").name(NameMode::Long), "methionine");
    }

    #[test]
    fn multi_character_names_are_lowercased() {
        assert_eq!(aa("ALA"), aa("ala"));
        assert_eq!(aa("Aspartic Acid").name(NameMode::Short), "D");
        assert_eq!(aa("GAP"), AminoAcid::GAP);
    }

    #[test]
    fn every_name_form_of_alanine_resolves_to_the_same_value() {
        let expected = aa("A");
        for name in ["A", "a", "ala", "Ala", "ALA", "alanine", "ALANINE"] {
            assert_eq!(aa(name), expected, "name {name}");
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            AminoAcid::from_name("xyz"),
            Err(ResidueError::UnknownResidueName {
                name: "xyz".to_string()
            })
        );
        assert!(AminoAcid::from_name("").is_err());
        assert!(AminoAcid::from_name("*").is_err());
        assert!(AminoAcid::from_name("term").is_err());
    }

    #[test]
    fn gap_is_recognized_from_every_gap_name() {
        assert!(aa("gap").is_gap());
        assert!(aa("-").is_gap());
        assert!(aa("none/gap").is_gap());
        assert!(!aa("ala").is_gap());
    }

    #[test]
    fn get_name_returns_the_requested_form() {
        assert_eq!(aa("ala").name(NameMode::default()), "A");
        assert_eq!(aa("met").name(NameMode::Long), "methionine");
        assert_eq!(aa("M").name(NameMode::Medium), "met");
    }

    #[test]
    fn name_str_parses_the_mode() {
        assert_eq!(aa("met").name_str("long"), Ok("methionine"));
        assert_eq!(
            aa("met").name_str("huge"),
            Err(ResidueError::InvalidNameMode {
                mode: "huge".to_string()
            })
        );
    }

    #[test]
    fn display_uses_the_short_name() {
        assert_eq!(aa("glutamine").to_string(), "Q");
        assert_eq!(AminoAcid::GAP.to_string(), "-");
    }

    #[test]
    fn debug_shows_the_short_name() {
        assert_eq!(format!("{:?}", aa("tyr")), "AminoAcid(\"Y\")");
    }

    #[test]
    fn copies_compare_equal_to_the_original() {
        let original = aa("W");
        let copy = original;
        assert_eq!(copy, original);
        assert_eq!(copy.ordinal(), original.ordinal());
    }

    #[test]
    fn ordering_follows_catalog_position() {
        assert!(AminoAcid::GAP < aa("A"));
        assert!(aa("A") < aa("C"));
        assert!(aa("Y") < aa("B"));
        assert!(aa("X") > aa("O"));
        assert!(aa("K") <= aa("lys"));
        assert!(aa("K") >= aa("lysine"));
    }

    #[test]
    fn hash_matches_hash_of_the_ordinal() {
        let lys = aa("lys");
        assert_eq!(hash_of(&lys), hash_of(&lys.ordinal()));
        assert_eq!(hash_of(&lys), hash_of(&aa("K")));
    }

    #[test]
    fn try_from_char_resolves_one_letter_codes() {
        assert_eq!(AminoAcid::try_from('v'), Ok(aa("val")));
        assert_eq!(AminoAcid::try_from('-'), Ok(AminoAcid::GAP));
        assert!(AminoAcid::try_from('1').is_err());
    }

    #[test]
    fn from_utf8_rejects_invalid_bytes_as_wrong_argument_type() {
        assert_eq!(AminoAcid::from_utf8(b"pro"), Ok(aa("P")));
        assert!(matches!(
            AminoAcid::from_utf8(&[0xff, 0xfe]),
            Err(ResidueError::InvalidArgumentType { .. })
        ));
    }

    #[test]
    fn from_ordinal_is_bounded_by_the_catalog() {
        assert_eq!(AminoAcid::from_ordinal(0), Some(AminoAcid::GAP));
        assert_eq!(AminoAcid::from_ordinal(26), Some(aa("X")));
        assert_eq!(AminoAcid::from_ordinal(27), None);
    }

    #[test]
    fn all_yields_every_residue_except_the_gap() {
        let all: Vec<_> = AminoAcid::all().collect();
        assert_eq!(all.len(), 26);
        assert!(all.iter().all(|residue| !residue.is_gap()));
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
