//! Tool call dispatch.
//!
//! `ToolDispatcher` resolves a tool name against the catalog, plans the
//! HTTP request and hands it to the client. Validation failures never reach
//! the network.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::{ErrorDescriptor, FreshError};
use crate::fresh_client::FreshClient;
use crate::models::Reply;
use crate::tools::ToolCatalog;

/// Routes tool calls to Freshservice.
///
/// Immutable once built; share it behind an `Arc` or clone it (the catalog
/// is reference counted and the HTTP client is cheap to clone).
#[derive(Clone)]
pub struct ToolDispatcher {
    catalog: Arc<ToolCatalog>,
    client: FreshClient,
}

impl ToolDispatcher {
    /// Builds the catalog and pairs it with `client`.
    ///
    /// # Errors
    ///
    /// Returns `FreshError::InvalidDefinition` if the catalog is inconsistent.
    pub fn new(client: FreshClient) -> Result<Self, FreshError> {
        Ok(Self {
            catalog: Arc::new(ToolCatalog::build()?),
            client,
        })
    }

    /// The tool catalog this dispatcher serves.
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Invokes a tool by canonical name or alias.
    ///
    /// # Errors
    ///
    /// `UnknownTool`, `MissingParameter` and `InvalidParameter` are raised
    /// before any request is sent; `Transport`, `Remote` and `Decode` come
    /// from the request itself.
    pub async fn invoke(&self, name: &str, args: &Map<String, Value>) -> Result<Reply, FreshError> {
        let definition = self
            .catalog
            .resolve(name)
            .ok_or_else(|| FreshError::unknown_tool(name))?;

        tracing::debug!(
            tool = name,
            canonical = definition.name,
            "Tool call received"
        );

        let plan = definition.plan(args)?;
        self.client.execute(&plan).await
    }

    /// Converts an error into the sanitized descriptor returned to callers.
    pub fn describe_error(&self, error: &FreshError) -> ErrorDescriptor {
        error.to_descriptor(self.client.api_key_for_sanitization())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn dispatcher() -> ToolDispatcher {
        let config = Config::new("http://127.0.0.1:1", "test_key_12345").unwrap();
        ToolDispatcher::new(FreshClient::new(&config).unwrap()).unwrap()
    }

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test args must be an object"),
        }
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let err = dispatcher()
            .invoke("make_coffee", &Map::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownTool);
    }

    #[tokio::test]
    async fn test_create_ticket_needs_email_or_requester() {
        let err = dispatcher()
            .invoke(
                "create_ticket",
                &args(json!({
                    "subject": "Network issue",
                    "description": "No Wi-Fi",
                    "source": 2,
                    "priority": 3,
                    "status": 2,
                })),
            )
            .await
            .unwrap_err();
        match err {
            FreshError::MissingParameter { name, .. } => assert_eq!(name, "email or requester_id"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_describe_error_redacts_key() {
        let d = dispatcher();
        let descriptor = d.describe_error(&FreshError::invalid_config("bad test_key_12345"));
        assert!(!descriptor.message.contains("test_key_12345"));
    }
}
