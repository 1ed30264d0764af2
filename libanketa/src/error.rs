//! Error types for Anketa

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnketaError>;

#[derive(Error, Debug)]
pub enum AnketaError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AnketaError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AnketaError::InvalidInput(_) => 3,
            AnketaError::Mail(MailError::Unavailable(_)) => 2,
            AnketaError::Mail(_) => 1,
            AnketaError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Mail client unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to launch mail client: {0}")]
    Launch(#[from] std::io::Error),

    #[error("Mail client exited with an error: {0}")]
    Failed(String),
}
