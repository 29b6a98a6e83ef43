use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(MissingField),
}

impl SettingsError {
    /// The requirement that was not met.
    pub fn missing_field(&self) -> MissingField {
        match self {
            Self::InvalidConfiguration(field) => *field,
        }
    }
}

/// A required setting that was never supplied to the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingField {
    OutputFolder,
    Inputs,
    InputBase,
    CodeFlavor,
}

impl MissingField {
    pub fn field_name(self) -> &'static str {
        match self {
            Self::OutputFolder => "output folder",
            Self::Inputs => "inputs",
            Self::InputBase => "input base",
            Self::CodeFlavor => "code flavor",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutputFolder => write!(f, "output folder must be set"),
            Self::Inputs => write!(f, "no input files given"),
            Self::InputBase => write!(f, "input base must be set to load includes"),
            Self::CodeFlavor => write!(f, "no code flavor selected"),
        }
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;
