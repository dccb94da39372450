use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn duplicate_key(message: &str) -> CommandError {
        CommandError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> CommandError {
        CommandError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> CommandError {
        CommandError::Validation { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            CommandError::Database { message, .. } => message.as_str(),
            CommandError::DuplicateKey { message } => message.as_str(),
            CommandError::NotFound { message } => message.as_str(),
            CommandError::Runtime { message, .. } => message.as_str(),
            CommandError::Serialization { message } => message.as_str(),
            CommandError::Validation { message, .. } => message.as_str(),
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                CommandError::Runtime { message, reason_code, retryable }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: false }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
