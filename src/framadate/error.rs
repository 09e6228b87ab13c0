use std::fmt;
use thiserror::Error;

/// Request within the poll workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Initiate,
    Schedule,
    Finalize,
    Delete,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Initiate => "poll creation",
            Self::Schedule => "schedule submission",
            Self::Finalize => "poll confirmation",
            Self::Delete => "poll deletion",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("Framadate returned an unexpected response during {step} (status {status})")]
    UnexpectedStatus { step: Step, status: u16 },

    #[error("Framadate response to {step} is missing {field}")]
    MissingField { step: Step, field: String },

    #[error("Date format must be read from the server before {0}")]
    DateFormatUnknown(Step),

    #[error("Invalid provider URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ProtocolError {
    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn step(&self) -> Option<Step> {
        match self {
            Self::UnexpectedStatus { step, .. } | Self::MissingField { step, .. } => Some(*step),
            Self::DateFormatUnknown(step) => Some(*step),
            Self::InvalidBaseUrl { .. } => None,
        }
    }
}
