use super::ResidueEntry;
use phf::{Map, phf_map};

pub(super) const RESIDUE_COUNT: usize = 27;

pub(super) static RESIDUE_TABLE: [ResidueEntry; RESIDUE_COUNT] = [
    ResidueEntry::new(0, "none/gap", "gap", "-"),
    // --- Standard Amino Acids ---
    ResidueEntry::new(1, "alanine", "ala", "A"),
    ResidueEntry::new(2, "cysteine", "cys", "C"),
    ResidueEntry::new(3, "aspartic acid", "asp", "D"),
    ResidueEntry::new(4, "glutamic acid", "glu", "E"),
    ResidueEntry::new(5, "phenylalanine", "phe", "F"),
    ResidueEntry::new(6, "glycine", "gly", "G"),
    ResidueEntry::new(7, "histidine", "his", "H"),
    ResidueEntry::new(8, "isoleucine", "ile", "I"),
    ResidueEntry::new(9, "lysine", "lys", "K"),
    ResidueEntry::new(10, "leucine", "leu", "L"),
    ResidueEntry::new(11, "methionine", "met", "M"),
    ResidueEntry::new(12, "asparagine", "asn", "N"),
    ResidueEntry::new(13, "proline", "pro", "P"),
    ResidueEntry::new(14, "glutamine", "gln", "Q"),
    ResidueEntry::new(15, "arginine", "arg", "R"),
    ResidueEntry::new(16, "serine", "ser", "S"),
    ResidueEntry::new(17, "threonine", "thr", "T"),
    ResidueEntry::new(18, "valine", "val", "V"),
    ResidueEntry::new(19, "tryptophan", "trp", "W"),
    ResidueEntry::new(20, "tyrosine", "tyr", "Y"),
    // --- Ambiguity Codes ---
    ResidueEntry::new(21, "asparagine/aspartic acid", "asx", "B"),
    ResidueEntry::new(22, "glutamine/glutamic acid", "glx", "Z"),
    ResidueEntry::new(23, "leucine/isoleucine", "xle", "J"),
    // --- Non-standard Amino Acids ---
    ResidueEntry::new(24, "selenocysteine", "sec", "U"),
    ResidueEntry::new(25, "pyrrolysine", "pyl", "O"),
    // --- Catch-all ---
    ResidueEntry::new(26, "undetermined", "xaa", "X"),
];

// Every name form of every row. `phf_map!` rejects duplicate keys at compile time.
// Must stay in step with RESIDUE_TABLE; see `name_index_covers_every_name_of_every_row`.
pub(super) static NAME_INDEX: Map<&'static str, u8> = phf_map! {
    "none/gap" => 0, "gap" => 0, "-" => 0,
    "alanine" => 1, "ala" => 1, "A" => 1,
    "cysteine" => 2, "cys" => 2, "C" => 2,
    "aspartic acid" => 3, "asp" => 3, "D" => 3,
    "glutamic acid" => 4, "glu" => 4, "E" => 4,
    "phenylalanine" => 5, "phe" => 5, "F" => 5,
    "glycine" => 6, "gly" => 6, "G" => 6,
    "histidine" => 7, "his" => 7, "H" => 7,
    "isoleucine" => 8, "ile" => 8, "I" => 8,
    "lysine" => 9, "lys" => 9, "K" => 9,
    "leucine" => 10, "leu" => 10, "L" => 10,
    "methionine" => 11, "met" => 11, "M" => 11,
    "asparagine" => 12, "asn" => 12, "N" => 12,
    "proline" => 13, "pro" => 13, "P" => 13,
    "glutamine" => 14, "gln" => 14, "Q" => 14,
    "arginine" => 15, "arg" => 15, "R" => 15,
    "serine" => 16, "ser" => 16, "S" => 16,
    "threonine" => 17, "thr" => 17, "T" => 17,
    "valine" => 18, "val" => 18, "V" => 18,
    "tryptophan" => 19, "trp" => 19, "W" => 19,
    "tyrosine" => 20, "tyr" => 20, "Y" => 20,
    "asparagine/aspartic acid" => 21, "asx" => 21, "B" => 21,
    "glutamine/glutamic acid" => 22, "glx" => 22, "Z" => 22,
    "leucine/isoleucine" => 23, "xle" => 23, "J" => 23,
    "selenocysteine" => 24, "sec" => 24, "U" => 24,
    "pyrrolysine" => 25, "pyl" => 25, "O" => 25,
    "undetermined" => 26, "xaa" => 26, "X" => 26,
};
