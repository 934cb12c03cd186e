//! Tool definitions for the Freshservice MCP server.
//!
//! This module contains the static catalog of tools and the planner that
//! turns a tool call into an HTTP request.

mod catalog;
mod definition;

pub use catalog::ToolCatalog;
pub use definition::*;
