use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("The location provided is not a valid URL: {location} ({reason})")]
    InvalidLocation { location: String, reason: String },

    #[error("The working directory cannot be used as an input base: {0}")]
    InvalidWorkingDirectory(String),

    #[error("An IO error occurred: {0}")]
    GeneralIo(#[from] std::io::Error),

    #[error("A settings error occurred: {0}")]
    Settings(#[from] swivel_config::prelude::SettingsError),
}
