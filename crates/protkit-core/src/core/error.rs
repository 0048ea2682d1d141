use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResidueError {
    #[error("Could not find amino acid name '{name}'")]
    UnknownResidueName { name: String },

    #[error("Invalid name mode '{mode}': expected 'short', 'medium' or 'long'")]
    InvalidNameMode { mode: String },

    #[error("Invalid argument type: expected {expected}, found {found}")]
    InvalidArgumentType {
        expected: &'static str,
        found: String,
    },
}

impl ResidueError {
    pub(crate) fn unknown_name(name: impl Into<String>) -> Self {
        Self::UnknownResidueName { name: name.into() }
    }
}
