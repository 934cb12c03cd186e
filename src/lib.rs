//! # freshservice-mcp
//!
//! An MCP (Model Context Protocol) server for the Freshservice IT service
//! management API.
//!
//! Each MCP tool maps to exactly one Freshservice REST endpoint. A call is
//! validated against a static table of tool definitions, turned into a single
//! HTTP request, and the JSON response is relayed back unchanged.
//!
//! ## Features
//!
//! - **Tickets and conversations**: list, filter, create, update, reply, notes
//! - **Changes**: create with planning fields, update, close, filter, tasks
//! - **People**: requesters, agents, agent groups, requester groups
//! - **Knowledge**: canned responses, workspaces, solution categories, folders, articles
//! - **Security**: API keys are never logged or exposed in error messages
//!
//! ## Architecture
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - Error taxonomy and the descriptor returned to callers
//! - [`tools`] - Static tool catalog and the request planner
//! - [`fresh_client`] - HTTP client for the Freshservice API
//! - [`dispatch`] - Resolves a tool call, plans it and sends it
//! - [`server`] - MCP server with routes generated from the catalog
//! - [`models`] - Reply envelope and pagination links
//!
//! ## Configuration
//!
//! - `FRESHSERVICE_DOMAIN`: account host (`acme.freshservice.com`) or full URL
//! - `FRESHSERVICE_APIKEY`: API key for Basic authentication
//!
//! Optional:
//! - `FRESHSERVICE_TIMEOUT_SECS`: request timeout, default 30
//! - `RUST_LOG`: Log level (e.g., `freshservice_mcp=debug`)
//!
//! ## Example
//!
//! Using the [`ToolDispatcher`](dispatch::ToolDispatcher) directly:
//!
//! ```ignore
//! use freshservice_mcp::config::Config;
//! use freshservice_mcp::dispatch::ToolDispatcher;
//! use freshservice_mcp::fresh_client::FreshClient;
//!
//! async fn example() -> Result<(), freshservice_mcp::error::FreshError> {
//!     let config = Config::from_env()?;
//!     let dispatcher = ToolDispatcher::new(FreshClient::new(&config)?)?;
//!
//!     let mut args = serde_json::Map::new();
//!     args.insert("per_page".into(), 10.into());
//!     let reply = dispatcher.invoke("get_tickets", &args).await?;
//!     println!("{}", reply.payload);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod dispatch;
pub mod error;
pub mod fresh_client;
pub mod models;
pub mod server;
pub mod tools;
