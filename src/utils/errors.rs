//! Error handling for EventDesk
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the EventDesk client
#[derive(Error, Debug)]
pub enum EventDeskError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Session file error: {0}")]
    SessionFile(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Please login first")]
    NotAuthenticated,

    #[error("Session expired. Please login again.")]
    SessionExpired,

    /// Server-reported failure. The message is the server's own wording,
    /// or a fallback `HTTP <status>` string when the body carried none.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Invalid response shape: {0}")]
    InvalidResponseShape(String),
}

/// Result type alias for EventDesk operations
pub type Result<T> = std::result::Result<T, EventDeskError>;

impl EventDeskError {
    /// Check if the error is recoverable by retrying the action
    pub fn is_recoverable(&self) -> bool {
        match self {
            EventDeskError::Http(_) => true,
            EventDeskError::Api { status, .. } => *status >= 500,
            EventDeskError::Io(_) => true,
            EventDeskError::Serialization(_) => false,
            EventDeskError::SessionFile(_) => true,
            EventDeskError::Config(_) => false,
            EventDeskError::InvalidInput(_) => false,
            EventDeskError::NotAuthenticated => false,
            EventDeskError::SessionExpired => false,
            EventDeskError::UrlParse(_) => false,
            EventDeskError::InvalidResponseShape(_) => false,
        }
    }

    /// Check whether the server rejected a registration because one already
    /// exists. The server reports this only through its message wording, so
    /// the match is a case-insensitive substring check.
    pub fn is_already_registered(&self) -> bool {
        match self {
            EventDeskError::Api { message, .. } => {
                message.to_lowercase().contains("already registered")
            }
            _ => false,
        }
    }

    /// Message suitable for view error state
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
