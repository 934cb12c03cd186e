//! The static tool catalog.
//!
//! Each submodule holds the definitions for one family of Freshservice
//! endpoints. [`ToolCatalog::build`] validates them all and indexes them by
//! canonical name and alias.

mod assets;
mod changes;
mod knowledge;
mod people;
mod tickets;

use std::collections::HashMap;

use super::definition::{ParamKind, ParamSpec, ToolDefinition};
use crate::error::FreshError;

pub(crate) const PAGE: ParamSpec =
    ParamSpec::query("page", ParamKind::Integer, "Page number (starts at 1)")
        .default_int(1)
        .at_least(1);

pub(crate) const PER_PAGE: ParamSpec =
    ParamSpec::query("per_page", ParamKind::Integer, "Items per page (1-100)")
        .default_int(30)
        .bounded(1, 100);

/// Every definition, grouped by family in presentation order.
fn families() -> [&'static [ToolDefinition]; 5] {
    [
        tickets::TOOLS,
        changes::TOOLS,
        assets::TOOLS,
        people::TOOLS,
        knowledge::TOOLS,
    ]
}

/// Validated, indexed set of tool definitions.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    ordered: Vec<&'static ToolDefinition>,
    index: HashMap<&'static str, &'static ToolDefinition>,
}

impl ToolCatalog {
    /// Validates every definition and indexes names and aliases.
    ///
    /// # Errors
    ///
    /// Returns `FreshError::InvalidDefinition` if a definition is
    /// inconsistent or a name or alias is used twice.
    pub fn build() -> Result<Self, FreshError> {
        let mut ordered = Vec::new();
        let mut index = HashMap::new();

        for definition in families().into_iter().flatten() {
            definition.validate()?;
            for name in std::iter::once(&definition.name).chain(definition.aliases) {
                if index.insert(*name, definition).is_some() {
                    return Err(FreshError::invalid_definition(
                        *name,
                        "tool name registered twice",
                    ));
                }
            }
            ordered.push(definition);
        }

        tracing::debug!(
            tools = ordered.len(),
            names = index.len(),
            "Tool catalog built"
        );

        Ok(Self { ordered, index })
    }

    /// Looks up a tool by canonical name or alias.
    pub fn resolve(&self, name: &str) -> Option<&'static ToolDefinition> {
        self.index.get(name).copied()
    }

    /// Canonical definitions in presentation order.
    pub fn definitions(&self) -> impl Iterator<Item = &'static ToolDefinition> + '_ {
        self.ordered.iter().copied()
    }

    /// Every exposed name (canonical names and aliases) with its definition.
    pub fn exposed(&self) -> impl Iterator<Item = (&'static str, &'static ToolDefinition)> + '_ {
        self.definitions().flat_map(|definition| {
            std::iter::once(definition.name)
                .chain(definition.aliases.iter().copied())
                .map(move |name| (name, definition))
        })
    }

    /// Number of canonical tools.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// True if the catalog holds no tools.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::definition::{Placement, RequestPlan, Verb};
    use serde_json::{json, Map, Value};

    /// Synthesizes a plausible value for a required parameter.
    fn sample(spec: &ParamSpec) -> Value {
        match spec.kind {
            ParamKind::Integer => json!(11),
            ParamKind::String | ParamKind::Any => json!("sample"),
            ParamKind::Boolean => json!(true),
            ParamKind::Object => json!({"name": "sample"}),
            ParamKind::IntegerList => json!([1, 2]),
            ParamKind::StringList => json!(["a@b.com"]),
        }
    }

    fn required_args(definition: &ToolDefinition) -> Map<String, Value> {
        let mut args = Map::new();
        for spec in definition.params {
            if spec.required || definition.one_of.first() == Some(&spec.name) {
                args.insert(spec.name.to_string(), sample(spec));
            }
        }
        args
    }

    #[test]
    fn test_catalog_builds() {
        let catalog = ToolCatalog::build().unwrap();
        assert_eq!(catalog.len(), 68);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_every_tool_plans_with_required_args() {
        let catalog = ToolCatalog::build().unwrap();
        for definition in catalog.definitions() {
            let plan = definition
                .plan(&required_args(definition))
                .unwrap_or_else(|e| panic!("{} failed to plan: {}", definition.name, e));
            assert_eq!(plan.verb, definition.verb, "{}", definition.name);
            assert!(plan.path.starts_with("/api/v2/"), "{}", definition.name);
            assert!(!plan.path.contains('{'), "{} left a placeholder", definition.name);
            if !definition.verb.has_body() {
                assert!(plan.body.is_none(), "{}", definition.name);
            }
        }
    }

    #[test]
    fn test_required_params_are_enforced() {
        let catalog = ToolCatalog::build().unwrap();
        for definition in catalog.definitions() {
            if let Some(spec) = definition.params.iter().find(|s| s.required) {
                let mut args = required_args(definition);
                args.remove(spec.name);
                let err = definition.plan(&args).unwrap_err();
                assert!(
                    matches!(err, FreshError::MissingParameter { .. }),
                    "{} accepted a call without {}",
                    definition.name,
                    spec.name
                );
            }
        }
    }

    #[test]
    fn test_aliases_resolve_to_canonical() {
        let catalog = ToolCatalog::build().unwrap();
        let pairs = [
            ("search_tickets", "filter_tickets"),
            ("get_ticket", "get_ticket_by_id"),
            ("get_products_by_id", "get_product_by_id"),
            ("get_requester_id", "get_requester_by_id"),
            ("getAgentGroupById", "get_agent_group_by_id"),
            ("get_requester_groups_by_id", "get_requester_group_by_id"),
        ];
        for (alias, canonical) in pairs {
            assert_eq!(catalog.resolve(alias).map(|d| d.name), Some(canonical));
        }
        assert!(catalog.resolve("make_coffee").is_none());
    }

    #[test]
    fn test_exposed_names_include_aliases() {
        let catalog = ToolCatalog::build().unwrap();
        assert_eq!(catalog.exposed().count(), catalog.len() + 6);
    }

    #[test]
    fn test_known_routes() {
        let catalog = ToolCatalog::build().unwrap();
        let expectations = [
            ("get_ticket_fields", Verb::Get, "/ticket_form_fields"),
            ("update_ticket", Verb::Put, "/tickets/{ticket_id}"),
            ("close_change", Verb::Put, "/changes/{change_id}"),
            ("delete_change", Verb::Delete, "/changes/{change_id}"),
            (
                "create_service_request",
                Verb::Post,
                "/service_catalog/items/{display_id}/place_request",
            ),
            (
                "add_requester_to_group",
                Verb::Post,
                "/requester_groups/{group_id}/members/{requester_id}",
            ),
            ("get_list_of_solution_folder", Verb::Get, "/solutions/folders"),
            ("publish_solution_article", Verb::Put, "/solutions/articles/{article_id}"),
        ];
        for (name, verb, template) in expectations {
            let definition = catalog.resolve(name).unwrap();
            assert_eq!(definition.verb, verb, "{}", name);
            assert_eq!(definition.template, template, "{}", name);
        }
    }

    #[test]
    fn test_create_change_nests_planning_fields() {
        let catalog = ToolCatalog::build().unwrap();
        let definition = catalog.resolve("create_change").unwrap();
        assert!(definition
            .params
            .iter()
            .any(|s| s.name == "backout_plan" && s.placement == Placement::Planning));

        let mut args = required_args(definition);
        args.insert("reason_for_change".into(), json!("patching"));
        let body = definition.plan(&args).unwrap().body.unwrap();
        assert_eq!(
            body["planning_fields"],
            json!({"reason_for_change": {"description": "patching"}})
        );
    }

    #[test]
    fn test_close_change_sets_status_and_explanation() {
        let catalog = ToolCatalog::build().unwrap();
        let definition = catalog.resolve("close_change").unwrap();
        let mut args = Map::new();
        args.insert("change_id".into(), json!(9));
        args.insert("change_result_explanation".into(), json!("rolled out"));
        args.insert("custom_fields".into(), json!({"verified": "yes"}));

        let plan = definition.plan(&args).unwrap();
        assert_eq!(plan.path, "/api/v2/changes/9");
        assert_eq!(
            plan.body,
            Some(json!({
                "status": 6,
                "custom_fields": {
                    "change_result_explanation": "rolled out",
                    "verified": "yes",
                },
            }))
        );
    }

    #[test]
    fn test_folder_listing_accepts_legacy_id() {
        let catalog = ToolCatalog::build().unwrap();
        let definition = catalog.resolve("get_list_of_solution_folder").unwrap();
        let mut args = Map::new();
        args.insert("id".into(), json!(3));
        let plan = definition.plan(&args).unwrap();
        assert_eq!(plan.target(), "/api/v2/solutions/folders?category_id=3");
    }

    fn plan_for(name: &str, value: Value) -> RequestPlan {
        let catalog = ToolCatalog::build().unwrap();
        let args = match value {
            Value::Object(map) => map,
            _ => panic!("test args must be an object"),
        };
        catalog.resolve(name).unwrap().plan(&args).unwrap()
    }

    #[test]
    fn test_create_service_request_defaults_quantity() {
        let plan = plan_for(
            "create_service_request",
            json!({"display_id": 12, "email": "a@b.com"}),
        );
        assert_eq!(plan.path, "/api/v2/service_catalog/items/12/place_request");
        assert_eq!(plan.body, Some(json!({"email": "a@b.com", "quantity": 1})));
    }

    #[test]
    fn test_create_solution_folder_defaults_visibility() {
        let plan = plan_for(
            "create_solution_folder",
            json!({"name": "VPN", "category_id": 3, "department_ids": 7}),
        );
        assert_eq!(plan.path, "/api/v2/solutions/folders");
        assert_eq!(
            plan.body,
            Some(json!({
                "name": "VPN",
                "category_id": 3,
                "department_ids": [7],
                "visibility": 4,
            }))
        );
    }

    #[test]
    fn test_create_solution_article_defaults_type_and_status() {
        let plan = plan_for(
            "create_solution_article",
            json!({"title": "Reset MFA", "description": "<p>Steps</p>", "folder_id": 5}),
        );
        assert_eq!(plan.path, "/api/v2/solutions/articles");
        assert_eq!(
            plan.body,
            Some(json!({
                "title": "Reset MFA",
                "description": "<p>Steps</p>",
                "folder_id": 5,
                "article_type": 1,
                "status": 1,
            }))
        );
    }

    #[test]
    fn test_send_ticket_reply_accepts_cc_string() {
        let plan = plan_for(
            "send_ticket_reply",
            json!({
                "ticket_id": 44,
                "body": "On it",
                "cc_emails": "[\"a@b.com\",\"c@d.com\"]",
                "bcc_emails": "audit@b.com",
            }),
        );
        assert_eq!(plan.path, "/api/v2/tickets/44/reply");
        assert_eq!(
            plan.body,
            Some(json!({
                "body": "On it",
                "cc_emails": ["a@b.com", "c@d.com"],
                "bcc_emails": ["audit@b.com"],
            }))
        );
    }

    #[test]
    fn test_filter_requesters_sends_include_agents_only_when_true() {
        let plan = plan_for(
            "filter_requesters",
            json!({"query": "first_name:'Vijay'", "include_agents": false}),
        );
        assert_eq!(
            plan.target(),
            "/api/v2/requesters?query=first_name%3A%27Vijay%27&page=1"
        );

        let plan = plan_for(
            "filter_requesters",
            json!({"query": "first_name:'Vijay'", "include_agents": "true"}),
        );
        assert_eq!(
            plan.query,
            vec![
                ("query".to_string(), "first_name:'Vijay'".to_string()),
                ("include_agents".to_string(), "true".to_string()),
                ("page".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_integer_ids_out_of_range_are_rejected() {
        let catalog = ToolCatalog::build().unwrap();
        let definition = catalog.resolve("delete_ticket").unwrap();
        let mut args = Map::new();
        args.insert("ticket_id".into(), json!(u64::MAX));
        assert!(matches!(
            definition.plan(&args),
            Err(FreshError::InvalidParameter { ref name, .. }) if name == "ticket_id"
        ));

        args.insert("ticket_id".into(), json!(1e19));
        assert!(matches!(
            definition.plan(&args),
            Err(FreshError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_add_requester_to_group_has_no_body() {
        let catalog = ToolCatalog::build().unwrap();
        let definition = catalog.resolve("add_requester_to_group").unwrap();
        let mut args = Map::new();
        args.insert("group_id".into(), json!(4));
        args.insert("requester_id".into(), json!(8));
        let plan = definition.plan(&args).unwrap();
        assert_eq!(plan.path, "/api/v2/requester_groups/4/members/8");
        assert_eq!(plan.body, None);
    }
}
