//! UI/backend events and error modeling for desktop GUI controller.

use shared::{
    domain::{UserId, UserRecord},
    error::{FetchError, ValidationError},
};

/// Completions posted by the backend worker.
#[derive(Debug, Clone)]
pub enum UiEvent {
    UsersLoaded(Result<Vec<UserRecord>, FetchError>),
    UserCreated(Result<UserRecord, FetchError>),
    UserUpdated {
        id: UserId,
        result: Result<UserRecord, FetchError>,
    },
    UserDeleted {
        id: UserId,
        result: Result<(), FetchError>,
    },
    BackendUnavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Status,
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    message: String,
}

impl UiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Transport,
            message: message.into(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<FetchError> for UiError {
    fn from(err: FetchError) -> Self {
        let category = match err.status_code() {
            Some(_) => UiErrorCategory::Status,
            None => UiErrorCategory::Transport,
        };
        Self {
            category,
            message: err.to_string(),
        }
    }
}

impl From<ValidationError> for UiError {
    fn from(err: ValidationError) -> Self {
        Self {
            category: UiErrorCategory::Validation,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use shared::error::StoreOperation;

    use super::*;

    #[test]
    fn status_failures_are_categorized_separately_from_transport() {
        let status = UiError::from(FetchError::status(StoreOperation::Delete, 500));
        assert_eq!(status.category(), UiErrorCategory::Status);
        assert_eq!(status.message(), "Failed to delete user");

        let transport = UiError::from(FetchError::transport(
            StoreOperation::Fetch,
            "error sending request",
        ));
        assert_eq!(transport.category(), UiErrorCategory::Transport);
        assert_eq!(transport.message(), "error sending request");
    }

    #[test]
    fn validation_error_keeps_required_fields_message() {
        let err = UiError::from(ValidationError::MissingFields);
        assert_eq!(err.category(), UiErrorCategory::Validation);
        assert_eq!(err.message(), "All fields are required");
    }
}
