use crate::core::error::ResidueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects which of the three names of a residue is produced.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum NameMode {
    /// Full chemical name (e.g. "aspartic acid").
    Long,
    /// Three-letter code, lowercase (e.g. "asp").
    Medium,
    /// One-letter code, uppercase (e.g. "D").
    #[default]
    Short,
}

impl NameMode {
    pub const ALL: [NameMode; 3] = [NameMode::Long, NameMode::Medium, NameMode::Short];

    pub fn as_str(&self) -> &'static str {
        match self {
            NameMode::Long => "long",
            NameMode::Medium => "medium",
            NameMode::Short => "short",
        }
    }
}

impl FromStr for NameMode {
    type Err = ResidueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(NameMode::Long),
            "medium" => Ok(NameMode::Medium),
            "short" => Ok(NameMode::Short),
            _ => Err(ResidueError::InvalidNameMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for NameMode {
    type Error = ResidueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for NameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
