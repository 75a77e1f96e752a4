use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        body: Option<String>,
    },

    #[error("Malformed response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected response payload: {message}")]
    UnexpectedPayload { message: String },

    #[error("Unknown resource: {name}")]
    UnknownResource { name: String },

    #[error("Unknown operation '{operation}' for resource '{resource}'")]
    UnknownOperation { resource: String, operation: String },

    #[error("Resource '{resource}' does not support operation '{operation}'")]
    UnsupportedOperation { resource: String, operation: String },

    #[error("Unresolved placeholder ':{placeholder}' in template {template}")]
    UnresolvedPlaceholder {
        placeholder: String,
        template: String,
    },

    #[error("Path value '{value}' is not allowed in template {template}")]
    InvalidPathValue { value: String, template: String },

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The request never produced a response.
    Transport,
    /// The server answered outside the 2xx range.
    Http,
    /// The server answered 2xx but the body was not what we expected.
    Payload,
    /// The caller asked for something the registry cannot build.
    Usage,
    Config,
}

impl ApiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Transport(_) => ErrorCategory::Transport,
            ApiError::Status { .. } => ErrorCategory::Http,
            ApiError::Parse(_) | ApiError::UnexpectedPayload { .. } => ErrorCategory::Payload,
            ApiError::UnknownResource { .. }
            | ApiError::UnknownOperation { .. }
            | ApiError::UnsupportedOperation { .. }
            | ApiError::UnresolvedPlaceholder { .. }
            | ApiError::InvalidPathValue { .. }
            | ApiError::InvalidUrl { .. } => ErrorCategory::Usage,
            ApiError::IoError(_)
            | ApiError::ConfigError { .. }
            | ApiError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    /// Status code of an HTTP-level failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ApiError::Transport(e) if e.is_timeout() => {
                "The API did not answer in time".to_string()
            }
            ApiError::Transport(_) => "Could not reach the API server".to_string(),
            ApiError::Status {
                status,
                status_text,
                body,
            } => match body.as_deref().map(str::trim) {
                Some(b) if !b.is_empty() => {
                    format!("The API rejected the request ({} {}): {}", status, status_text, b)
                }
                _ => format!("The API rejected the request ({} {})", status, status_text),
            },
            ApiError::Parse(_) | ApiError::UnexpectedPayload { .. } => {
                format!("The API returned an unexpected response: {}", self)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display_and_category() {
        let err = ApiError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
            body: Some("{\"error\":\"missing\"}".to_string()),
        };

        assert_eq!(err.to_string(), "HTTP 404 Not Found");
        assert_eq!(err.category(), ErrorCategory::Http);
        assert_eq!(err.status(), Some(404));
        assert!(err.user_friendly_message().contains("missing"));
    }

    #[test]
    fn test_usage_errors_are_grouped() {
        let err = ApiError::UnresolvedPlaceholder {
            placeholder: "id".to_string(),
            template: "/api/roles/:id".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Usage);
        assert_eq!(err.status(), None);
    }
}
