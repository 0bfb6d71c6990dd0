//! Error types for the KinGraph API client

use thiserror::Error;

/// Fallback shown to users when no more specific message is available
pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Errors that can occur when calling the KinGraph backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, DNS, timeout)
    #[error("request failed: {0}")]
    Network(String),

    /// Server responded with a non-success status
    #[error("server returned status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Server-supplied message, when the error body carried one
        message: Option<String>,
    },

    /// Response body did not match the expected payload shape
    #[error("response parsing failed: {0}")]
    Parse(String),
}

impl ApiError {
    /// Derive the human-readable message for this failure
    ///
    /// Most specific source first: a server-supplied message, then the
    /// error's own transport message, then [`DEFAULT_ERROR_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        self.server_message()
            .or_else(|| self.transport_message())
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
    }

    /// Message the server included in its error body, if any
    fn server_message(&self) -> Option<String> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message.clone()),
            _ => None,
        }
    }

    /// Message describing the failure at the transport/protocol level
    fn transport_message(&self) -> Option<String> {
        match self {
            Self::Network(cause) | Self::Parse(cause) if !cause.is_empty() => {
                Some(self.to_string())
            },
            Self::Status { .. } => Some(self.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins() {
        let error = ApiError::Status {
            status: 503,
            message: Some("maintenance window".to_string()),
        };
        assert_eq!(error.user_message(), "maintenance window");
    }

    #[test]
    fn test_status_without_server_message_uses_transport_message() {
        let error = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(error.user_message(), "server returned status 500");
    }

    #[test]
    fn test_empty_server_message_is_skipped() {
        let error = ApiError::Status {
            status: 404,
            message: Some(String::new()),
        };
        assert_eq!(error.user_message(), "server returned status 404");
    }

    #[test]
    fn test_network_error_uses_cause() {
        let error = ApiError::Network("connection refused".to_string());
        assert_eq!(error.user_message(), "request failed: connection refused");
    }

    #[test]
    fn test_messageless_network_error_falls_back_to_default() {
        let error = ApiError::Network(String::new());
        assert_eq!(error.user_message(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_parse_error_uses_cause() {
        let error = ApiError::Parse("missing field `name`".to_string());
        assert_eq!(
            error.user_message(),
            "response parsing failed: missing field `name`"
        );
    }
}
