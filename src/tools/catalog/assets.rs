//! Product catalog.

use super::{PAGE, PER_PAGE};
use crate::tools::definition::{ParamKind, ParamSpec, ToolDefinition, Verb};

pub(super) static TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        name: "get_all_products",
        description: "List products with pagination.",
        template: "/products",
        params: &[PAGE, PER_PAGE],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "get_product_by_id",
        aliases: &["get_products_by_id"],
        description: "Get a product by ID.",
        template: "/products/{product_id}",
        params: &[ParamSpec::path("product_id", "ID of the product")],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "create_product",
        description: "Create a product. status is \"In Production\", \"In Pipeline\" or \"Retired\".",
        verb: Verb::Post,
        template: "/products",
        params: &[
            ParamSpec::body("name", ParamKind::String, "Product name").required(),
            ParamSpec::body("asset_type_id", ParamKind::Integer, "Asset type ID").required(),
            ParamSpec::body("manufacturer", ParamKind::String, "Manufacturer"),
            ParamSpec::body("status", ParamKind::Any, "Lifecycle status"),
            ParamSpec::body("mode_of_procurement", ParamKind::String, "Buy, Lease or Both"),
            ParamSpec::body("depreciation_type_id", ParamKind::Integer, "Depreciation type ID"),
            ParamSpec::body("description", ParamKind::String, "HTML description"),
            ParamSpec::body("description_text", ParamKind::String, "Plain text description"),
        ],
        ..ToolDefinition::BASE
    },
    ToolDefinition {
        name: "update_product",
        description: "Update a product. name and asset_type_id are always sent.",
        verb: Verb::Put,
        template: "/products/{id}",
        params: &[
            ParamSpec::path("id", "ID of the product"),
            ParamSpec::body("name", ParamKind::String, "Product name").required(),
            ParamSpec::body("asset_type_id", ParamKind::Integer, "Asset type ID").required(),
            ParamSpec::body("manufacturer", ParamKind::String, "Manufacturer"),
            ParamSpec::body("status", ParamKind::Any, "Lifecycle status"),
            ParamSpec::body("mode_of_procurement", ParamKind::String, "Buy, Lease or Both"),
            ParamSpec::body("depreciation_type_id", ParamKind::Integer, "Depreciation type ID"),
            ParamSpec::body("description", ParamKind::String, "HTML description"),
            ParamSpec::body("description_text", ParamKind::String, "Plain text description"),
        ],
        ..ToolDefinition::BASE
    },
];
