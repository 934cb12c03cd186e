//! MCP server implementation for Freshservice.
//!
//! This module defines the `FreshServer` struct that implements the MCP
//! `ServerHandler` trait. Its tool routes are generated from the catalog:
//! one route per canonical tool name and one per alias.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::{
        router::tool::{ToolRoute, ToolRouter},
        tool::ToolCallContext,
    },
    model::{CallToolResult, Content, JsonObject, ServerCapabilities, ServerInfo, Tool},
    tool_handler, ErrorData as McpError, ServerHandler,
};

use crate::dispatch::ToolDispatcher;
use crate::error::ErrorDescriptor;
use crate::models::Reply;
use crate::tools::ToolDefinition;

/// The Freshservice MCP server.
#[derive(Clone)]
pub struct FreshServer {
    /// Tool router for MCP tool dispatch. Every route shares one dispatcher.
    tool_router: ToolRouter<Self>,
}

impl FreshServer {
    /// Creates a server exposing every tool in the dispatcher's catalog.
    pub fn new(dispatcher: ToolDispatcher) -> Self {
        Self {
            tool_router: build_tool_router(Arc::new(dispatcher)),
        }
    }
}

/// Builds one route per exposed tool name.
pub fn build_tool_router<S>(dispatcher: Arc<ToolDispatcher>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    dispatcher
        .catalog()
        .exposed()
        .fold(ToolRouter::new(), |router, (name, definition)| {
            router.with_route(create_route(name, definition, dispatcher.clone()))
        })
}

/// Describes a catalog entry as an MCP tool under `name`.
pub fn to_tool(name: &'static str, definition: &ToolDefinition) -> Tool {
    let description = if name == definition.name {
        definition.description.to_string()
    } else {
        format!("Alias of `{}`. {}", definition.name, definition.description)
    };
    Tool::new(name, description, Arc::new(definition.input_schema()))
}

fn create_route<S>(
    name: &'static str,
    definition: &ToolDefinition,
    dispatcher: Arc<ToolDispatcher>,
) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool(name, definition), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let dispatcher = dispatcher.clone();
        async move { Ok::<_, McpError>(run_tool(&dispatcher, name, &args).await) }.boxed()
    })
}

/// Runs a tool call and renders the outcome as an MCP tool result.
///
/// Failures become error results carrying the JSON error descriptor, so the
/// caller always sees why a call failed.
pub async fn run_tool(dispatcher: &ToolDispatcher, name: &str, args: &JsonObject) -> CallToolResult {
    match dispatcher.invoke(name, args).await {
        Ok(reply) => render_reply(&reply),
        Err(e) => {
            let descriptor = dispatcher.describe_error(&e);
            tracing::warn!(
                tool = name,
                kind = ?descriptor.kind,
                error = %descriptor.message,
                "Tool call failed"
            );
            render_error(&descriptor)
        }
    }
}

/// Renders a successful reply.
///
/// The payload is pretty-printed JSON. Pagination links, when present,
/// follow as a second text item.
pub fn render_reply(reply: &Reply) -> CallToolResult {
    let mut content = Vec::with_capacity(2);

    if reply.payload.is_null() {
        content.push(Content::text(format!(
            "Request succeeded with no content (HTTP {}).",
            reply.status
        )));
    } else {
        let text = serde_json::to_string_pretty(&reply.payload)
            .unwrap_or_else(|_| reply.payload.to_string());
        content.push(Content::text(text));
    }

    if !reply.links.is_empty() {
        let pagination = serde_json::json!({ "pagination": reply.links });
        content.push(Content::text(pagination.to_string()));
    }

    CallToolResult::success(content)
}

/// Renders a failure as an error result holding the descriptor JSON.
pub fn render_error(descriptor: &ErrorDescriptor) -> CallToolResult {
    let text =
        serde_json::to_string_pretty(descriptor).unwrap_or_else(|_| descriptor.message.clone());
    CallToolResult::error(vec![Content::text(text)])
}

#[tool_handler]
impl ServerHandler for FreshServer {
    /// Returns server information for the MCP initialize handshake.
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Freshservice IT service management tools. Tickets: get_tickets, \
                 filter_tickets, get_ticket_by_id, create_ticket, update_ticket, \
                 send_ticket_reply, create_ticket_note. Changes: get_changes, \
                 filter_changes, create_change, update_change, close_change. \
                 Also products, requesters, agents, agent and requester groups, \
                 canned responses, workspaces and solution articles. List tools \
                 accept page and per_page (max 100); a second result item carries \
                 next_page/prev_page when more pages exist. Failed calls return a \
                 JSON error with kind, message and, for API errors, status and body."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::{ErrorKind, FreshError};
    use crate::fresh_client::FreshClient;
    use crate::models::PageLinks;
    use serde_json::{json, Value};

    fn test_dispatcher() -> ToolDispatcher {
        let config = Config::new("https://test.example.com", "test_key_12345").unwrap();
        ToolDispatcher::new(FreshClient::new(&config).expect("Failed to create test client"))
            .expect("catalog should build")
    }

    fn text_of(content: &Content) -> &str {
        match &content.raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_server_info_has_tools_capability() {
        let server = FreshServer::new(test_dispatcher());
        let info = server.get_info();
        assert!(info.instructions.is_some());
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn test_server_routes_every_exposed_tool() {
        let dispatcher = test_dispatcher();
        let exposed = dispatcher.catalog().exposed().count();
        let server = FreshServer::new(dispatcher);
        assert_eq!(server.tool_router.list_all().len(), exposed);
    }

    #[test]
    fn test_router_exposes_names_and_aliases() {
        let dispatcher = Arc::new(test_dispatcher());
        let router: ToolRouter<FreshServer> = build_tool_router(dispatcher.clone());
        let tools = router.list_all();
        assert_eq!(tools.len(), dispatcher.catalog().exposed().count());

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_tickets"));
        assert!(names.contains(&"search_tickets"));
        assert!(names.contains(&"getAgentGroupById"));
        assert!(names.contains(&"publish_solution_article"));
    }

    #[test]
    fn test_alias_tool_mentions_canonical_name() {
        let dispatcher = test_dispatcher();
        let definition = dispatcher.catalog().resolve("get_ticket").unwrap();
        let tool = to_tool("get_ticket", definition);
        let description = tool.description.unwrap_or_default();
        assert!(description.contains("get_ticket_by_id"));
        assert_eq!(tool.input_schema.get("type"), Some(&json!("object")));
    }

    #[test]
    fn test_render_reply_round_trips_payload() {
        let payload = json!({"tickets": [{"id": 1, "subject": "Printer"}]});
        let reply = Reply {
            status: 200,
            payload: payload.clone(),
            links: PageLinks::default(),
        };
        let result = render_reply(&reply);
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.content.len(), 1);
        let decoded: Value = serde_json::from_str(text_of(&result.content[0])).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_render_reply_with_pagination_and_empty_body() {
        let reply = Reply {
            status: 204,
            payload: Value::Null,
            links: PageLinks {
                next: Some(2),
                prev: None,
            },
        };
        let result = render_reply(&reply);
        assert_eq!(result.content.len(), 2);
        assert!(text_of(&result.content[0]).contains("204"));
        let pagination: Value = serde_json::from_str(text_of(&result.content[1])).unwrap();
        assert_eq!(pagination["pagination"]["next_page"], 2);
    }

    #[test]
    fn test_render_error_carries_descriptor() {
        let descriptor = FreshError::unknown_tool("make_coffee").to_descriptor("");
        let result = render_error(&descriptor);
        assert_eq!(result.is_error, Some(true));
        let json: Value = serde_json::from_str(text_of(&result.content[0])).unwrap();
        assert_eq!(json["kind"], "unknown_tool");
        assert_eq!(descriptor.kind, ErrorKind::UnknownTool);
    }

    #[tokio::test]
    async fn test_run_tool_reports_missing_parameter() {
        let dispatcher = test_dispatcher();
        let result = run_tool(&dispatcher, "get_agent", &JsonObject::new()).await;
        assert_eq!(result.is_error, Some(true));
        let json: Value = serde_json::from_str(text_of(&result.content[0])).unwrap();
        assert_eq!(json["kind"], "missing_parameter");
    }
}
