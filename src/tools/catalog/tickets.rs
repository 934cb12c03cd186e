//! Tickets, ticket conversations and the service catalog.

use super::{PAGE, PER_PAGE};
use crate::tools::definition::{ParamKind, ParamSpec, Placement, ToolDefinition, Verb};

const TICKET_ID: ParamSpec = ParamSpec::path("ticket_id", "ID of the ticket");

pub(super) static TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        name: "get_ticket_fields",
        description: "Get the ticket form fields configured in Freshservice.",
        template: "/ticket_form_fields",
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_tickets",
        description: "List tickets with pagination. Pagination links are returned alongside the tickets.",
        template: "/tickets",
        params: &[PAGE, PER_PAGE],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "create_ticket",
        description: "Create a ticket. Either email or requester_id identifies the requester. \
                      source: 1 email, 2 portal, 3 phone, 7 chat. priority: 1 low to 4 urgent. \
                      status: 2 open, 3 pending, 4 resolved, 5 closed.",
        verb: Verb::Post,
        template: "/tickets",
        params: &[
            ParamSpec::body("subject", ParamKind::String, "Ticket subject").required(),
            ParamSpec::body("description", ParamKind::String, "HTML description").required(),
            ParamSpec::body("source", ParamKind::Integer, "Source channel code").required(),
            ParamSpec::body("priority", ParamKind::Integer, "Priority code").required(),
            ParamSpec::body("status", ParamKind::Integer, "Status code").required(),
            ParamSpec::body("email", ParamKind::String, "Requester email"),
            ParamSpec::body("requester_id", ParamKind::Integer, "Requester ID"),
            ParamSpec::body("custom_fields", ParamKind::Object, "Custom field values"),
        ],
        one_of: &["email", "requester_id"],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "update_ticket",
        description: "Update a ticket. The entries of `updates` become the request body \
                      (custom_fields included).",
        verb: Verb::Put,
        template: "/tickets/{ticket_id}",
        params: &[
            TICKET_ID,
            ParamSpec::new("updates", ParamKind::Object, Placement::Merge, "Fields to change")
                .required()
                .alias("ticket_fields"),
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "delete_ticket",
        description: "Delete a ticket.",
        verb: Verb::Delete,
        template: "/tickets/{ticket_id}",
        params: &[TICKET_ID],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "filter_tickets",
        aliases: &["search_tickets"],
        description: "Filter tickets with a Freshservice query string, \
                      e.g. \"priority:3 AND status:2\".",
        template: "/tickets/filter",
        params: &[
            ParamSpec::query("query", ParamKind::String, "Filter query").required(),
            PAGE,
            ParamSpec::query("workspace_id", ParamKind::Integer, "Restrict to a workspace"),
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_ticket_by_id",
        aliases: &["get_ticket"],
        description: "Get a ticket by ID.",
        template: "/tickets/{ticket_id}",
        params: &[TICKET_ID],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_requested_items",
        description: "List the requested items of a service request ticket.",
        template: "/tickets/{ticket_id}/requested_items",
        params: &[TICKET_ID],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "send_ticket_reply",
        description: "Send a reply on a ticket.",
        verb: Verb::Post,
        template: "/tickets/{ticket_id}/reply",
        params: &[
            TICKET_ID,
            ParamSpec::body("body", ParamKind::String, "Reply content (HTML)").required(),
            ParamSpec::body("from_email", ParamKind::String, "Sender address"),
            ParamSpec::body("user_id", ParamKind::Integer, "Agent sending the reply"),
            ParamSpec::body("cc_emails", ParamKind::StringList, "CC addresses"),
            ParamSpec::body("bcc_emails", ParamKind::StringList, "BCC addresses"),
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "create_ticket_note",
        description: "Add a note to a ticket.",
        verb: Verb::Post,
        template: "/tickets/{ticket_id}/notes",
        params: &[
            TICKET_ID,
            ParamSpec::body("body", ParamKind::String, "Note content (HTML)").required(),
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "update_ticket_conversation",
        description: "Update the body of a ticket conversation.",
        verb: Verb::Put,
        template: "/conversations/{conversation_id}",
        params: &[
            ParamSpec::path("conversation_id", "ID of the conversation"),
            ParamSpec::body("body", ParamKind::String, "New content (HTML)").required(),
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "list_all_ticket_conversation",
        description: "List every conversation on a ticket.",
        template: "/tickets/{ticket_id}/conversations",
        params: &[TICKET_ID],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "list_service_items",
        description: "List service catalog items, one page per call.",
        template: "/service_catalog/items",
        params: &[PAGE, PER_PAGE],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "create_service_request",
        description: "Place a request for a service catalog item.",
        verb: Verb::Post,
        template: "/service_catalog/items/{display_id}/place_request",
        params: &[
            ParamSpec::path("display_id", "Display ID of the catalog item"),
            ParamSpec::body("email", ParamKind::String, "Requester email").required(),
            ParamSpec::body("requested_for", ParamKind::String, "Email of the person it is for"),
            ParamSpec::body("quantity", ParamKind::Integer, "Quantity requested")
                .default_int(1)
                .at_least(1),
        ],
        ..ToolDefinition::BASE
    },
];
