//! Requesters, agents, agent groups and requester groups.

use super::{PAGE, PER_PAGE};
use crate::tools::definition::{ParamKind, ParamSpec, Placement, ToolDefinition, Verb};

const fn text(name: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec::body(name, ParamKind::String, description)
}

const fn int(name: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec::body(name, ParamKind::Integer, description)
}

// Profile fields shared by requesters and agents.
const LAST_NAME: ParamSpec = text("last_name", "Last name");
const JOB_TITLE: ParamSpec = text("job_title", "Job title");
const WORK_PHONE: ParamSpec = text("work_phone_number", "Work phone number");
const MOBILE_PHONE: ParamSpec = text("mobile_phone_number", "Mobile phone number");
const DEPARTMENT_IDS: ParamSpec =
    ParamSpec::body("department_ids", ParamKind::IntegerList, "Department IDs");
const SEE_DEPARTMENT_TICKETS: ParamSpec = ParamSpec::body(
    "can_see_all_tickets_from_associated_departments",
    ParamKind::Boolean,
    "Whether they see every ticket of their departments",
);
const REPORTING_MANAGER: ParamSpec = int("reporting_manager_id", "Reporting manager user ID");
const ADDRESS: ParamSpec = text("address", "Postal address");
const TIME_ZONE: ParamSpec = text("time_zone", "Time zone name");
const TIME_FORMAT: ParamSpec = text("time_format", "\"12h\" or \"24h\"");
const LANGUAGE: ParamSpec = text("language", "Language code");
const LOCATION: ParamSpec = int("location_id", "Location ID");
const BACKGROUND: ParamSpec = text("background_information", "Background information");
const SECONDARY_EMAILS: ParamSpec =
    ParamSpec::body("secondary_emails", ParamKind::StringList, "Additional email addresses");
const CUSTOM_FIELDS: ParamSpec =
    ParamSpec::body("custom_fields", ParamKind::Object, "Custom field values");

const REQUESTER_ID: ParamSpec = ParamSpec::path("requester_id", "ID of the requester");
const AGENT_ID: ParamSpec = ParamSpec::path("agent_id", "ID of the agent");
const GROUP_ID: ParamSpec = ParamSpec::path("group_id", "ID of the group");

pub(super) static TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        name: "create_requester",
        description: "Create a requester. At least one of primary_email, work_phone_number \
                      or mobile_phone_number is needed.",
        verb: Verb::Post,
        template: "/requesters",
        params: &[
            text("first_name", "First name").required(),
            LAST_NAME,
            JOB_TITLE,
            text("primary_email", "Primary email address"),
            SECONDARY_EMAILS,
            WORK_PHONE,
            MOBILE_PHONE,
            DEPARTMENT_IDS,
            SEE_DEPARTMENT_TICKETS,
            REPORTING_MANAGER,
            ADDRESS,
            TIME_ZONE,
            TIME_FORMAT,
            LANGUAGE,
            LOCATION,
            BACKGROUND,
            CUSTOM_FIELDS,
        ],
        one_of: &["primary_email", "work_phone_number", "mobile_phone_number"],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_all_requesters",
        description: "List requesters with pagination.",
        template: "/requesters",
        params: &[PAGE, PER_PAGE],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_requester_by_id",
        aliases: &["get_requester_id"],
        description: "Get a requester by ID.",
        template: "/requesters/{requester_id}",
        params: &[REQUESTER_ID],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "list_all_requester_fields",
        description: "List the requester fields configured in Freshservice.",
        template: "/requester_fields",
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "update_requester",
        description: "Update a requester. Only the fields supplied are sent.",
        verb: Verb::Put,
        template: "/requesters/{requester_id}",
        params: &[
            REQUESTER_ID,
            text("first_name", "First name"),
            LAST_NAME,
            JOB_TITLE,
            text("primary_email", "Primary email address"),
            SECONDARY_EMAILS,
            WORK_PHONE,
            MOBILE_PHONE,
            DEPARTMENT_IDS,
            SEE_DEPARTMENT_TICKETS,
            REPORTING_MANAGER,
            ADDRESS,
            TIME_ZONE,
            TIME_FORMAT,
            LANGUAGE,
            LOCATION,
            BACKGROUND,
            CUSTOM_FIELDS,
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "filter_requesters",
        description: "Filter requesters with a query such as \"first_name:'Vijay'\".",
        template: "/requesters",
        params: &[
            ParamSpec::query("query", ParamKind::String, "Filter query").required(),
            ParamSpec::query("include_agents", ParamKind::Boolean, "Include agents in results")
                .flag(),
            PAGE,
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "create_agent",
        description: "Create an agent.",
        verb: Verb::Post,
        template: "/agents",
        params: &[
            text("first_name", "First name").required(),
            text("email", "Email address").required(),
            LAST_NAME,
            ParamSpec::body("occasional", ParamKind::Boolean, "Occasional (day pass) agent"),
            JOB_TITLE,
            WORK_PHONE,
            MOBILE_PHONE,
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_agent",
        description: "Get an agent by ID.",
        template: "/agents/{agent_id}",
        params: &[AGENT_ID],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_all_agents",
        description: "List agents with pagination.",
        template: "/agents",
        params: &[PAGE, PER_PAGE],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "filter_agents",
        description: "Filter agents with a query string. Returns one page; \
                      follow next_page for more.",
        template: "/agents",
        params: &[
            ParamSpec::query("query", ParamKind::String, "Filter query").required(),
            PAGE,
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "update_agent",
        description: "Update an agent. Only the fields supplied are sent.",
        verb: Verb::Put,
        template: "/agents/{agent_id}",
        params: &[
            AGENT_ID,
            ParamSpec::body("occasional", ParamKind::Boolean, "Occasional (day pass) agent"),
            text("email", "Email address"),
            DEPARTMENT_IDS,
            SEE_DEPARTMENT_TICKETS,
            REPORTING_MANAGER,
            ADDRESS,
            TIME_ZONE,
            TIME_FORMAT,
            LANGUAGE,
            LOCATION,
            BACKGROUND,
            int("scoreboard_level_id", "Arcade scoreboard level"),
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_agent_fields",
        description: "List the agent fields configured in Freshservice.",
        template: "/agent_fields",
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_all_agent_groups",
        description: "List agent groups.",
        template: "/groups",
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_agent_group_by_id",
        aliases: &["getAgentGroupById"],
        description: "Get an agent group by ID.",
        template: "/groups/{group_id}",
        params: &[GROUP_ID],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "create_group",
        description: "Create an agent group. unassigned_for is one of 30m, 1h, 2h, 4h, \
                      8h, 12h, 1d, 2d, 3d.",
        verb: Verb::Post,
        template: "/groups",
        params: &[
            text("name", "Group name").required(),
            text("description", "Group description"),
            ParamSpec::body("agent_ids", ParamKind::IntegerList, "Member agent IDs"),
            ParamSpec::body(
                "auto_ticket_assign",
                ParamKind::Boolean,
                "Assign tickets automatically",
            ),
            int("escalate_to", "User notified when tickets stay unassigned"),
            text("unassigned_for", "Delay before the escalation email"),
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "update_group",
        description: "Update an agent group. The entries of `updates` become the request body.",
        verb: Verb::Put,
        template: "/groups/{group_id}",
        params: &[
            GROUP_ID,
            ParamSpec::new("updates", ParamKind::Object, Placement::Merge, "Fields to change")
                .required()
                .alias("group_fields"),
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_all_requester_groups",
        description: "List requester groups with pagination.",
        template: "/requester_groups",
        params: &[PAGE, PER_PAGE],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_requester_group_by_id",
        aliases: &["get_requester_groups_by_id"],
        description: "Get a requester group by ID.",
        template: "/requester_groups/{requester_group_id}",
        params: &[ParamSpec::path("requester_group_id", "ID of the requester group")],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "create_requester_group",
        description: "Create a manual requester group.",
        verb: Verb::Post,
        template: "/requester_groups",
        params: &[
            text("name", "Group name").required(),
            text("description", "Group description"),
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "update_requester_group",
        description: "Rename or describe a requester group.",
        verb: Verb::Put,
        template: "/requester_groups/{id}",
        params: &[
            ParamSpec::path("id", "ID of the requester group"),
            text("name", "Group name"),
            text("description", "Group description"),
        ],
        one_of: &["name", "description"],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "list_requester_group_members",
        description: "List the members of a requester group.",
        template: "/requester_groups/{group_id}/members",
        params: &[GROUP_ID],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "add_requester_to_group",
        description: "Add a requester to a manual requester group.",
        verb: Verb::Post,
        template: "/requester_groups/{group_id}/members/{requester_id}",
        params: &[GROUP_ID, REQUESTER_ID],
        ..ToolDefinition::BASE
    },
];
