//! Error types for the Freshservice MCP server.
//!
//! This module defines `FreshError`, the unified error type used throughout
//! the crate, and `ErrorDescriptor`, the structured form handed back to
//! tool callers.
//!
//! # Security
//!
//! All error messages are sanitized to ensure API keys are never leaked
//! in logs or error responses. Use `sanitize_message()` when constructing
//! error messages from external sources.

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Unified error type for all Freshservice operations.
///
/// The first group of variants is the invocation taxonomy callers see for
/// every tool call; the rest can only happen while the server starts up.
#[derive(Error, Debug)]
pub enum FreshError {
    /// No tool is registered under this name or alias.
    #[error("unknown tool: {name}")]
    UnknownTool {
        /// The name the caller asked for.
        name: String,
    },

    /// A required parameter was absent (or null).
    #[error("missing required parameter '{name}' for tool {tool}")]
    MissingParameter {
        /// The tool being invoked.
        tool: String,
        /// The parameter, or the alternatives joined with "or".
        name: String,
    },

    /// A parameter could not be coerced to its declared type or is out of range.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// The offending parameter.
        name: String,
        /// Why it was rejected.
        message: String,
    },

    /// The request never produced an HTTP response (DNS, refused, reset, timeout).
    #[error("transport error during {operation}: {source}")]
    Transport {
        /// Method and path of the failed request.
        operation: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// Freshservice answered with a non-2xx status.
    #[error("Freshservice returned HTTP {status}: {body}")]
    Remote {
        /// The HTTP status code returned.
        status: StatusCode,
        /// The raw response body, unmodified.
        body: String,
    },

    /// A 2xx response whose body is not valid JSON.
    #[error("could not decode response body (HTTP {status}): {source}")]
    Decode {
        /// The (successful) status that carried the malformed body.
        status: StatusCode,
        /// The JSON parser error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// A static tool definition violates the catalog invariants.
    #[error("invalid tool definition '{tool}': {message}")]
    InvalidDefinition {
        /// The definition at fault.
        tool: String,
        /// What is wrong with it.
        message: String,
    },

    /// Connection test failed.
    #[error("connection test failed: {message}")]
    ConnectionTest {
        /// Details about why the connection test failed.
        message: String,
    },
}

/// Coarse classification of a [`FreshError`], as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`FreshError::UnknownTool`].
    UnknownTool,
    /// See [`FreshError::MissingParameter`].
    MissingParameter,
    /// See [`FreshError::InvalidParameter`].
    InvalidParameter,
    /// See [`FreshError::Transport`].
    TransportError,
    /// See [`FreshError::Remote`].
    RemoteError,
    /// See [`FreshError::Decode`].
    DecodeError,
    /// Startup problems: configuration, client, catalog, connectivity.
    Configuration,
}

/// Structured error value returned to tool callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDescriptor {
    /// Error classification.
    pub kind: ErrorKind,
    /// Human-readable, sanitized message.
    pub message: String,
    /// Remote HTTP status, for remote and decode errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Remote response body: parsed JSON when possible, otherwise the raw text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl FreshError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        FreshError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        FreshError::Config(message.into())
    }

    /// Creates an unknown tool error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        FreshError::UnknownTool { name: name.into() }
    }

    /// Creates a missing parameter error.
    pub fn missing_parameter(tool: impl Into<String>, name: impl Into<String>) -> Self {
        FreshError::MissingParameter {
            tool: tool.into(),
            name: name.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        FreshError::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid definition error.
    pub fn invalid_definition(tool: impl Into<String>, message: impl Into<String>) -> Self {
        FreshError::InvalidDefinition {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Creates a connection test error.
    pub fn connection_test(message: impl Into<String>) -> Self {
        FreshError::ConnectionTest {
            message: message.into(),
        }
    }

    /// Returns the caller-facing classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            FreshError::UnknownTool { .. } => ErrorKind::UnknownTool,
            FreshError::MissingParameter { .. } => ErrorKind::MissingParameter,
            FreshError::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            FreshError::Transport { .. } => ErrorKind::TransportError,
            FreshError::Remote { .. } => ErrorKind::RemoteError,
            FreshError::Decode { .. } => ErrorKind::DecodeError,
            FreshError::Config(_)
            | FreshError::HttpClient(_)
            | FreshError::InvalidDefinition { .. }
            | FreshError::ConnectionTest { .. } => ErrorKind::Configuration,
        }
    }

    /// Returns the remote HTTP status, if the error carries one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FreshError::Remote { status, .. } | FreshError::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the transport error was caused by the client timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, FreshError::Transport { source, .. } if source.is_timeout())
    }

    /// Converts this error into the structured value returned to callers.
    ///
    /// The message and any string body are sanitized against `api_key`.
    #[must_use]
    pub fn to_descriptor(&self, api_key: &str) -> ErrorDescriptor {
        let body = match self {
            FreshError::Remote { body, .. } if !body.is_empty() => {
                let body = Self::sanitize_message(body, api_key);
                Some(
                    serde_json::from_str::<serde_json::Value>(&body)
                        .unwrap_or(serde_json::Value::String(body)),
                )
            }
            _ => None,
        };

        let mut message = self.sanitized_display(api_key);
        if self.is_timeout() {
            message.push_str(" (request timed out)");
        }

        ErrorDescriptor {
            kind: self.kind(),
            message,
            status: self.status().map(|s| s.as_u16()),
            body,
        }
    }

    /// Sanitizes an error message to remove any occurrence of the API key.
    ///
    /// API keys must never appear in logs, error messages, or responses.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to sanitize
    /// * `api_key` - The API key to strip from the message
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the API key replaced with `[REDACTED]`
    #[must_use]
    pub fn sanitize_message(message: &str, api_key: &str) -> String {
        if api_key.is_empty() {
            return message.to_string();
        }
        message.replace(api_key, "[REDACTED]")
    }

    /// Creates a sanitized version of this error's display message.
    #[must_use]
    pub fn sanitized_display(&self, api_key: &str) -> String {
        Self::sanitize_message(&self.to_string(), api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = FreshError::missing_env("FRESHSERVICE_APIKEY");
        assert!(err.to_string().contains("FRESHSERVICE_APIKEY"));
        assert!(err.to_string().contains("missing"));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_unknown_tool_error() {
        let err = FreshError::unknown_tool("make_coffee");
        assert_eq!(err.to_string(), "unknown tool: make_coffee");
        assert_eq!(err.kind(), ErrorKind::UnknownTool);
    }

    #[test]
    fn test_missing_parameter_error() {
        let err = FreshError::missing_parameter("delete_ticket", "ticket_id");
        let msg = err.to_string();
        assert!(msg.contains("ticket_id"));
        assert!(msg.contains("delete_ticket"));
        assert_eq!(err.kind(), ErrorKind::MissingParameter);
    }

    #[test]
    fn test_remote_descriptor_parses_json_body() {
        let err = FreshError::Remote {
            status: StatusCode::NOT_FOUND,
            body: r#"{"code":"access_denied"}"#.to_string(),
        };
        let descriptor = err.to_descriptor("key");
        assert_eq!(descriptor.kind, ErrorKind::RemoteError);
        assert_eq!(descriptor.status, Some(404));
        assert_eq!(
            descriptor.body,
            Some(serde_json::json!({"code": "access_denied"}))
        );
    }

    #[test]
    fn test_remote_descriptor_keeps_text_body() {
        let err = FreshError::Remote {
            status: StatusCode::BAD_GATEWAY,
            body: "<html>bad gateway</html>".to_string(),
        };
        let descriptor = err.to_descriptor("key");
        assert_eq!(
            descriptor.body,
            Some(serde_json::Value::String("<html>bad gateway</html>".into()))
        );
    }

    #[test]
    fn test_descriptor_serializes_kind_snake_case() {
        let descriptor = FreshError::missing_parameter("get_agent", "agent_id").to_descriptor("");
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["kind"], "missing_parameter");
        assert!(json.get("status").is_none());
        assert!(json.get("body").is_none());
    }

    #[test]
    fn test_descriptor_is_sanitized() {
        let err = FreshError::invalid_config("bad key super_secret_key_12345");
        let descriptor = err.to_descriptor("super_secret_key_12345");
        assert!(!descriptor.message.contains("super_secret_key_12345"));
        assert!(descriptor.message.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_removes_api_key() {
        let api_key = "super_secret_key_12345";
        let message = format!("Error connecting with key {} to server", api_key);
        let sanitized = FreshError::sanitize_message(&message, api_key);
        assert!(!sanitized.contains(api_key));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_key() {
        let message = "Some error message";
        let sanitized = FreshError::sanitize_message(message, "");
        assert_eq!(sanitized, message);
    }

    #[test]
    fn test_connection_test_error() {
        let err = FreshError::connection_test("Could not reach server");
        let msg = err.to_string();
        assert!(msg.contains("connection test failed"));
        assert!(msg.contains("Could not reach server"));
    }
}
