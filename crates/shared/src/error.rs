use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreOperation {
    Fetch,
    Save,
    Delete,
}

impl StoreOperation {
    /// Generic text surfaced when the store answers with a failure status.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Fetch => "Failed to fetch users",
            Self::Save => "Failed to save user",
            Self::Delete => "Failed to delete user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchErrorKind {
    Status(u16),
    Transport(String),
}

/// Any failed list/create/update/delete call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct FetchError {
    pub operation: StoreOperation,
    pub kind: FetchErrorKind,
}

impl FetchError {
    pub fn status(operation: StoreOperation, status: u16) -> Self {
        Self {
            operation,
            kind: FetchErrorKind::Status(status),
        }
    }

    pub fn transport(operation: StoreOperation, message: impl Into<String>) -> Self {
        Self {
            operation,
            kind: FetchErrorKind::Transport(message.into()),
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            FetchErrorKind::Status(_) => self.operation.failure_message().to_string(),
            FetchErrorKind::Transport(message) => message.clone(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self.kind {
            FetchErrorKind::Status(status) => Some(status),
            FetchErrorKind::Transport(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,
}
