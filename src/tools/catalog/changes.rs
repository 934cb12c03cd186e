//! Change management.

use super::{PAGE, PER_PAGE};
use crate::tools::definition::{ParamKind, ParamSpec, Placement, ToolDefinition, Verb};

const CHANGE_ID: ParamSpec = ParamSpec::path("change_id", "ID of the change");

const fn planning(name: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec::new(name, ParamKind::String, Placement::Planning, description)
}

pub(super) static TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        name: "get_changes",
        description: "List changes with pagination.",
        template: "/changes",
        params: &[PAGE, PER_PAGE],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_change_by_id",
        description: "Get a change by ID.",
        template: "/changes/{change_id}",
        params: &[CHANGE_ID],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "create_change",
        description: "Create a change. priority: 1 low to 4 urgent. impact: 1 low to 3 high. \
                      status: 1 open to 6 closed. risk: 1 low to 4 very high. \
                      change_type: 1 minor, 2 standard, 3 major, 4 emergency. \
                      Planning texts are sent as planning_fields.",
        verb: Verb::Post,
        template: "/changes",
        params: &[
            ParamSpec::body("requester_id", ParamKind::Integer, "Requester ID").required(),
            ParamSpec::body("subject", ParamKind::String, "Change subject").required(),
            ParamSpec::body("description", ParamKind::String, "HTML description").required(),
            ParamSpec::body("priority", ParamKind::Integer, "Priority code").required(),
            ParamSpec::body("impact", ParamKind::Integer, "Impact code").required(),
            ParamSpec::body("status", ParamKind::Integer, "Status code").required(),
            ParamSpec::body("risk", ParamKind::Integer, "Risk code").required(),
            ParamSpec::body("change_type", ParamKind::Integer, "Change type code").required(),
            ParamSpec::body("group_id", ParamKind::Integer, "Agent group ID"),
            ParamSpec::body("agent_id", ParamKind::Integer, "Assigned agent ID"),
            ParamSpec::body("department_id", ParamKind::Integer, "Department ID"),
            ParamSpec::body("planned_start_date", ParamKind::String, "ISO 8601 start"),
            ParamSpec::body("planned_end_date", ParamKind::String, "ISO 8601 end"),
            planning("reason_for_change", "Reason for the change"),
            planning("change_impact", "Impact analysis"),
            planning("rollout_plan", "Rollout plan"),
            planning("backout_plan", "Backout plan"),
            ParamSpec::body("custom_fields", ParamKind::Object, "Custom field values"),
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "update_change",
        description: "Update a change. The entries of `updates` become the request body; \
                      planning_fields values must already be {\"description\": ...} objects.",
        verb: Verb::Put,
        template: "/changes/{change_id}",
        params: &[
            CHANGE_ID,
            ParamSpec::new("updates", ParamKind::Object, Placement::Merge, "Fields to change")
                .required()
                .alias("change_fields"),
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "close_change",
        description: "Close a change (status 6) and record the result explanation.",
        verb: Verb::Put,
        template: "/changes/{change_id}",
        params: &[
            CHANGE_ID,
            ParamSpec::new(
                "change_result_explanation",
                ParamKind::String,
                Placement::CustomField,
                "Outcome of the change",
            )
            .required(),
            ParamSpec::new(
                "custom_fields",
                ParamKind::Object,
                Placement::CustomFields,
                "Additional custom field values",
            ),
        ],
        fixed: &[("status", 6)],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "delete_change",
        description: "Delete a change.",
        verb: Verb::Delete,
        template: "/changes/{change_id}",
        params: &[CHANGE_ID],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "filter_changes",
        description: "Filter changes with a Freshservice query string.",
        template: "/changes/filter",
        params: &[
            ParamSpec::query("query", ParamKind::String, "Filter query").required(),
            PAGE,
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_change_tasks",
        description: "List the tasks of a change.",
        template: "/changes/{change_id}/tasks",
        params: &[CHANGE_ID],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "create_change_note",
        description: "Add a note to a change.",
        verb: Verb::Post,
        template: "/changes/{change_id}/notes",
        params: &[
            CHANGE_ID,
            ParamSpec::body("body", ParamKind::String, "Note content (HTML)").required(),
        ],
        ..ToolDefinition::BASE
    },
];
