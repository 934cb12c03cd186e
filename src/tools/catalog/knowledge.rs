//! Canned responses, workspaces and the solutions knowledge base.

use crate::tools::definition::{ParamKind, ParamSpec, ToolDefinition, Verb};

const ID: ParamSpec = ParamSpec::path("id", "ID of the record");
const ARTICLE_ID: ParamSpec = ParamSpec::path("article_id", "ID of the solution article");

const TAGS: ParamSpec = ParamSpec::body("tags", ParamKind::StringList, "Tags");
const KEYWORDS: ParamSpec = ParamSpec::body("keywords", ParamKind::StringList, "SEO keywords");
const REVIEW_DATE: ParamSpec =
    ParamSpec::body("review_date", ParamKind::String, "Review date (YYYY-MM-DD)");

pub(super) static TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        name: "get_all_canned_response",
        description: "List canned responses.",
        template: "/canned_responses",
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_canned_response",
        description: "Get a canned response by ID.",
        template: "/canned_responses/{id}",
        params: &[ID],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "list_all_canned_response_folder",
        description: "List canned response folders.",
        template: "/canned_response_folders",
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "list_canned_response_folder",
        description: "Get a canned response folder by ID.",
        template: "/canned_response_folders/{id}",
        params: &[ID],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "list_all_workspaces",
        description: "List workspaces.",
        template: "/workspaces",
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_workspace",
        description: "Get a workspace by ID.",
        template: "/workspaces/{id}",
        params: &[ID],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_all_solution_category",
        description: "List solution categories.",
        template: "/solutions/categories",
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_solution_category",
        description: "Get a solution category by ID.",
        template: "/solutions/categories/{id}",
        params: &[ID],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "create_solution_category",
        description: "Create a solution category.",
        verb: Verb::Post,
        template: "/solutions/categories",
        params: &[
            ParamSpec::body("name", ParamKind::String, "Category name").required(),
            ParamSpec::body("description", ParamKind::String, "Category description"),
            ParamSpec::body("workspace_id", ParamKind::Integer, "Workspace ID"),
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "update_solution_category",
        description: "Update a solution category.",
        verb: Verb::Put,
        template: "/solutions/categories/{category_id}",
        params: &[
            ParamSpec::path("category_id", "ID of the category"),
            ParamSpec::body("name", ParamKind::String, "Category name").required(),
            ParamSpec::body("description", ParamKind::String, "Category description"),
            ParamSpec::body("workspace_id", ParamKind::Integer, "Workspace ID"),
            ParamSpec::body("default_category", ParamKind::Boolean, "Make it the default"),
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_list_of_solution_folder",
        description: "List the solution folders of a category.",
        template: "/solutions/folders",
        params: &[ParamSpec::query("category_id", ParamKind::Integer, "ID of the category")
            .required()
            .alias("id")],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_solution_folder",
        description: "Get a solution folder by ID.",
        template: "/solutions/folders/{id}",
        params: &[ID],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "create_solution_folder",
        description: "Create a solution folder in a category. visibility: 1 all users, \
                      2 logged-in users, 3 agents, 4 departments (default), 5 agent groups, \
                      6 requester groups, 7 selected users.",
        verb: Verb::Post,
        template: "/solutions/folders",
        params: &[
            ParamSpec::body("name", ParamKind::String, "Folder name").required(),
            ParamSpec::body("category_id", ParamKind::Integer, "ID of the category").required(),
            ParamSpec::body("department_ids", ParamKind::IntegerList, "Department IDs").required(),
            ParamSpec::body("visibility", ParamKind::Integer, "Visibility code").default_int(4),
            ParamSpec::body("description", ParamKind::String, "Folder description"),
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "update_solution_folder",
        description: "Update a solution folder.",
        verb: Verb::Put,
        template: "/solutions/folders/{id}",
        params: &[
            ID,
            ParamSpec::body("name", ParamKind::String, "Folder name"),
            ParamSpec::body("description", ParamKind::String, "Folder description"),
            ParamSpec::body("visibility", ParamKind::Integer, "Visibility code"),
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_list_of_solution_article",
        description: "List the solution articles of a folder.",
        template: "/solutions/articles",
        params: &[ParamSpec::query("folder_id", ParamKind::Integer, "ID of the folder")
            .required()
            .alias("id")],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_solution_article",
        description: "Get a solution article by ID.",
        template: "/solutions/articles/{id}",
        params: &[ID],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "create_solution_article",
        description: "Create a solution article. article_type: 1 permanent, 2 workaround. \
                      status: 1 draft, 2 published.",
        verb: Verb::Post,
        template: "/solutions/articles",
        params: &[
            ParamSpec::body("title", ParamKind::String, "Article title").required(),
            ParamSpec::body("description", ParamKind::String, "Article body (HTML)").required(),
            ParamSpec::body("folder_id", ParamKind::Integer, "ID of the folder").required(),
            ParamSpec::body("article_type", ParamKind::Integer, "Article type").default_int(1),
            ParamSpec::body("status", ParamKind::Integer, "Publication status").default_int(1),
            TAGS,
            KEYWORDS,
            REVIEW_DATE,
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "update_solution_article",
        description: "Update a solution article. Only the fields supplied are sent.",
        verb: Verb::Put,
        template: "/solutions/articles/{article_id}",
        params: &[
            ARTICLE_ID,
            ParamSpec::body("title", ParamKind::String, "Article title"),
            ParamSpec::body("description", ParamKind::String, "Article body (HTML)"),
            ParamSpec::body("folder_id", ParamKind::Integer, "ID of the folder"),
            ParamSpec::body("article_type", ParamKind::Integer, "Article type"),
            ParamSpec::body("status", ParamKind::Integer, "Publication status"),
            TAGS,
            KEYWORDS,
            REVIEW_DATE,
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "publish_solution_article",
        description: "Publish a solution article (status 2).",
        verb: Verb::Put,
        template: "/solutions/articles/{article_id}",
        params: &[ARTICLE_ID],
        fixed: &[("status", 2)],
        ..ToolDefinition::BASE
    },
];
