use thiserror::Error;

use crate::expr::ParseError;
use crate::framadate::ProtocolError;
use crate::transport::TransportError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid expression: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("Network error: {0}")]
    Transport(#[from] TransportError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Parse(_) => 3,
            Self::Config(_) | Self::Toml(_) => 4,
            Self::Protocol(_) => 5,
            Self::Transport(_) => 6,
            Self::Io(_) => 1,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse(err) => format!("Could not understand the expression: {}", err),
            Self::Protocol(err) => err.to_string(),
            Self::Transport(err) => format!("Could not reach the poll provider: {}", err),
            Self::Config(message) => format!("Configuration problem: {}", message),
            Self::Toml(err) => format!("Configuration problem: {}", err),
            Self::Validation(message) => message.clone(),
            Self::Io(err) => format!("Error: {}", err),
        }
    }

    /// Check if this error was raised before any request was sent
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Protocol(_) | Self::Transport(_))
    }
}
