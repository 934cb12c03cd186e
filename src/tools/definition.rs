//! Static tool definitions and the request planner.
//!
//! Every tool is a [`ToolDefinition`]: an HTTP verb, a URL template and a
//! list of [`ParamSpec`]s saying where each parameter lands in the request.
//! [`ToolDefinition::plan`] turns a definition plus the caller's arguments
//! into a [`RequestPlan`] without touching the network.

use std::collections::HashSet;
use std::fmt;

use reqwest::Method;
use serde_json::{json, Map, Value};

use crate::error::FreshError;

/// Path prefix shared by every Freshservice endpoint.
pub const API_PREFIX: &str = "/api/v2";

/// HTTP verb of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl Verb {
    /// Returns the matching `reqwest` method.
    pub fn method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
        }
    }

    /// Whether requests with this verb carry a JSON body.
    pub fn has_body(self) -> bool {
        matches!(self, Verb::Post | Verb::Put)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method().as_str())
    }
}

/// Declared type of a parameter, used for coercion and the input schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Signed integer. Numeric strings are accepted.
    Integer,
    /// Text. Numbers and booleans are accepted and stringified.
    String,
    /// Boolean. `"true"` and `"false"` are accepted.
    Boolean,
    /// JSON object. A string holding a JSON object is accepted.
    Object,
    /// List of integers. A single integer is accepted.
    IntegerList,
    /// List of strings. A single string or a JSON array in a string is accepted.
    StringList,
    /// Anything, passed through untouched.
    Any,
}

impl ParamKind {
    fn json_type(self) -> Option<&'static str> {
        match self {
            ParamKind::Integer => Some("integer"),
            ParamKind::String => Some("string"),
            ParamKind::Boolean => Some("boolean"),
            ParamKind::Object => Some("object"),
            ParamKind::IntegerList | ParamKind::StringList => Some("array"),
            ParamKind::Any => None,
        }
    }

    /// Coerces `value` to this kind, or explains why it cannot be.
    pub fn coerce(self, value: &Value) -> Result<Value, String> {
        match self {
            ParamKind::Integer => as_integer(value)
                .map(Value::from)
                .ok_or_else(|| format!("expected an integer, got {}", describe(value))),
            ParamKind::String => as_text(value)
                .map(Value::String)
                .ok_or_else(|| format!("expected a string, got {}", describe(value))),
            ParamKind::Boolean => match value {
                Value::Bool(_) => Ok(value.clone()),
                Value::String(s) if s.trim().eq_ignore_ascii_case("true") => Ok(Value::Bool(true)),
                Value::String(s) if s.trim().eq_ignore_ascii_case("false") => {
                    Ok(Value::Bool(false))
                }
                _ => Err(format!("expected a boolean, got {}", describe(value))),
            },
            ParamKind::Object => match value {
                Value::Object(_) => Ok(value.clone()),
                Value::String(s) => match serde_json::from_str::<Value>(s) {
                    Ok(parsed @ Value::Object(_)) => Ok(parsed),
                    _ => Err("expected an object, got a string".to_string()),
                },
                _ => Err(format!("expected an object, got {}", describe(value))),
            },
            ParamKind::IntegerList => list_items(value)
                .iter()
                .map(|item| as_integer(item).map(Value::from))
                .collect::<Option<Vec<_>>>()
                .map(Value::Array)
                .ok_or_else(|| "expected a list of integers".to_string()),
            ParamKind::StringList => list_items(value)
                .iter()
                .map(|item| as_text(item).map(Value::String))
                .collect::<Option<Vec<_>>>()
                .map(Value::Array)
                .ok_or_else(|| "expected a list of strings".to_string()),
            ParamKind::Any => Ok(value.clone()),
        }
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) if n.is_f64() => n
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64),
        // u64 values above i64::MAX are rejected rather than saturated
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Spreads a list-ish value into its items. Scalars become one-item lists
/// and strings that hold a JSON array are parsed.
fn list_items(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::String(s) if s.trim_start().starts_with('[') => {
            match serde_json::from_str::<Value>(s) {
                Ok(Value::Array(items)) => items,
                _ => vec![value.clone()],
            }
        }
        other => vec![other.clone()],
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Renders a value for a URL path segment or query string.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

/// Where a parameter lands in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Fills the `{name}` placeholder of the URL template.
    Path,
    /// Appended to the query string.
    Query,
    /// Top-level JSON body field.
    Body,
    /// Object whose entries are merged into the top-level body.
    Merge,
    /// Nested as `planning_fields.<name>.description`.
    Planning,
    /// Nested as `custom_fields.<name>`.
    CustomField,
    /// Object merged into `custom_fields`.
    CustomFields,
}

/// Declaration of one tool parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Canonical parameter name.
    pub name: &'static str,
    /// Legacy name accepted in place of `name`.
    pub alias: Option<&'static str>,
    /// Declared type.
    pub kind: ParamKind,
    /// Where the value goes.
    pub placement: Placement,
    /// Whether the caller must supply it.
    pub required: bool,
    /// Value used when the caller leaves it out.
    pub default: Option<i64>,
    /// Inclusive lower bound for integers.
    pub min: Option<i64>,
    /// Inclusive upper bound for integers.
    pub max: Option<i64>,
    /// Boolean switch that is left out of the request unless true.
    pub flag: bool,
    /// Human-readable description for the input schema.
    pub description: &'static str,
}

impl ParamSpec {
    /// An optional parameter with the given placement.
    pub const fn new(
        name: &'static str,
        kind: ParamKind,
        placement: Placement,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            alias: None,
            kind,
            placement,
            required: false,
            default: None,
            min: None,
            max: None,
            flag: false,
            description,
        }
    }

    /// A required integer path parameter.
    pub const fn path(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Integer, Placement::Path, description).required()
    }

    /// An optional query parameter.
    pub const fn query(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self::new(name, kind, Placement::Query, description)
    }

    /// An optional top-level body field.
    pub const fn body(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self::new(name, kind, Placement::Body, description)
    }

    /// Marks the parameter as required.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Accepts `alias` in place of the canonical name.
    pub const fn alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Sets the value used when the parameter is absent.
    pub const fn default_int(mut self, value: i64) -> Self {
        self.default = Some(value);
        self
    }

    /// Sets an inclusive lower bound.
    pub const fn at_least(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets inclusive lower and upper bounds.
    pub const fn bounded(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Sends the parameter only when it is true.
    pub const fn flag(mut self) -> Self {
        self.flag = true;
        self
    }

    /// Finds this parameter in `args`, by name first and then by alias.
    /// Explicit nulls count as absent.
    fn lookup<'a>(&self, args: &'a Map<String, Value>) -> Option<&'a Value> {
        let by_name = args.get(self.name).filter(|v| !v.is_null());
        by_name.or_else(|| {
            self.alias
                .and_then(|alias| args.get(alias))
                .filter(|v| !v.is_null())
        })
    }

    /// Coerces `value` and checks its bounds.
    fn accept(&self, value: &Value) -> Result<Value, FreshError> {
        let value = self
            .kind
            .coerce(value)
            .map_err(|message| FreshError::invalid_parameter(self.name, message))?;

        if let Some(n) = value.as_i64() {
            if let Some(min) = self.min.filter(|min| n < *min) {
                return Err(FreshError::invalid_parameter(
                    self.name,
                    format!("must be at least {}, got {}", min, n),
                ));
            }
            if let Some(max) = self.max.filter(|max| n > *max) {
                return Err(FreshError::invalid_parameter(
                    self.name,
                    format!("must be at most {}, got {}", max, n),
                ));
            }
        }

        Ok(value)
    }

    fn schema(&self) -> Value {
        let mut schema = Map::new();
        if let Some(ty) = self.kind.json_type() {
            schema.insert("type".into(), ty.into());
        }
        match self.kind {
            ParamKind::IntegerList => {
                schema.insert("items".into(), json!({ "type": "integer" }));
            }
            ParamKind::StringList => {
                schema.insert("items".into(), json!({ "type": "string" }));
            }
            _ => {}
        }
        schema.insert("description".into(), self.description.into());
        if let Some(default) = self.default {
            schema.insert("default".into(), default.into());
        }
        if let Some(min) = self.min {
            schema.insert("minimum".into(), min.into());
        }
        if let Some(max) = self.max {
            schema.insert("maximum".into(), max.into());
        }
        Value::Object(schema)
    }
}

/// A fully resolved HTTP request, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPlan {
    /// Tool the plan was built for.
    pub tool: &'static str,
    /// HTTP verb.
    pub verb: Verb,
    /// Path under the account base URL, placeholders filled and encoded.
    pub path: String,
    /// Query pairs in order, not yet encoded.
    pub query: Vec<(String, String)>,
    /// JSON body, if the request has one.
    pub body: Option<Value>,
}

impl RequestPlan {
    /// Path plus the percent-encoded query string (spaces become `%20`).
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }
}

/// Static description of one tool.
#[derive(Debug, Clone, Copy)]
pub struct ToolDefinition {
    /// Canonical tool name.
    pub name: &'static str,
    /// Other names that resolve to this tool.
    pub aliases: &'static [&'static str],
    /// Description shown to the caller.
    pub description: &'static str,
    /// HTTP verb.
    pub verb: Verb,
    /// URL template under [`API_PREFIX`], with `{placeholder}` slots.
    pub template: &'static str,
    /// Declared parameters, in query-string order.
    pub params: &'static [ParamSpec],
    /// Integer body fields always written, after everything else.
    pub fixed: &'static [(&'static str, i64)],
    /// At least one of these parameters must be present.
    pub one_of: &'static [&'static str],
}

impl ToolDefinition {
    /// Base for struct-update syntax in the catalog tables.
    pub const BASE: ToolDefinition = ToolDefinition {
        name: "",
        aliases: &[],
        description: "",
        verb: Verb::Get,
        template: "",
        params: &[],
        fixed: &[],
        one_of: &[],
    };

    /// Names of the `{placeholder}` slots in the URL template.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.template;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    names.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        names
    }

    /// Checks the definition's internal consistency.
    ///
    /// Every placeholder must be filled by a required `Path` parameter and
    /// every `Path` parameter must have a placeholder.
    pub fn validate(&self) -> Result<(), FreshError> {
        let fail = |message: String| Err(FreshError::invalid_definition(self.name, message));

        if self.name.is_empty() || !self.template.starts_with('/') {
            return fail("name must be set and template must start with '/'".into());
        }
        if self.template.matches('{').count() != self.template.matches('}').count() {
            return fail(format!("unbalanced braces in template {}", self.template));
        }

        let mut seen = HashSet::new();
        for spec in self.params {
            if !seen.insert(spec.name) || spec.alias.is_some_and(|a| !seen.insert(a)) {
                return fail(format!("parameter '{}' declared twice", spec.name));
            }
            if matches!(spec.placement, Placement::Merge | Placement::CustomFields)
                && spec.kind != ParamKind::Object
            {
                return fail(format!("parameter '{}' must be an object", spec.name));
            }
            if !self.verb.has_body()
                && !matches!(spec.placement, Placement::Path | Placement::Query)
            {
                return fail(format!(
                    "parameter '{}' is a body field on a {} tool",
                    spec.name, self.verb
                ));
            }
        }

        let placeholders = self.placeholders();
        for placeholder in &placeholders {
            let filled = self.params.iter().any(|spec| {
                spec.name == *placeholder && spec.placement == Placement::Path && spec.required
            });
            if !filled {
                return fail(format!(
                    "placeholder {{{}}} has no required path parameter",
                    placeholder
                ));
            }
        }
        for spec in self.params.iter().filter(|s| s.placement == Placement::Path) {
            if !placeholders.contains(&spec.name) {
                return fail(format!("path parameter '{}' has no placeholder", spec.name));
            }
        }
        for name in self.one_of {
            if !self.params.iter().any(|spec| spec.name == *name) {
                return fail(format!("one_of names undeclared parameter '{}'", name));
            }
        }

        Ok(())
    }

    /// JSON schema describing the tool's arguments.
    pub fn input_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        for spec in self.params {
            properties.insert(spec.name.to_string(), spec.schema());
            if let Some(alias) = spec.alias {
                let mut schema = spec.schema();
                if let Value::Object(map) = &mut schema {
                    map.insert(
                        "description".into(),
                        format!("Legacy name for `{}`.", spec.name).into(),
                    );
                }
                properties.insert(alias.to_string(), schema);
            }
        }

        // Parameters with a legacy alias can be satisfied either way, so
        // they are left out of the schema's required list.
        let required: Vec<Value> = self
            .params
            .iter()
            .filter(|spec| spec.required && spec.alias.is_none())
            .map(|spec| Value::from(spec.name))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".into(), "object".into());
        schema.insert("properties".into(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".into(), Value::Array(required));
        }
        schema
    }

    /// Builds the HTTP request for an invocation of this tool.
    ///
    /// # Errors
    ///
    /// `MissingParameter` when a required parameter (or every member of the
    /// `one_of` group) is absent, `InvalidParameter` when a value cannot be
    /// coerced or is out of bounds.
    pub fn plan(&self, args: &Map<String, Value>) -> Result<RequestPlan, FreshError> {
        if !self.one_of.is_empty() {
            let any_present = self.params.iter().any(|spec| {
                self.one_of.contains(&spec.name) && spec.lookup(args).is_some()
            });
            if !any_present {
                return Err(FreshError::missing_parameter(
                    self.name,
                    self.one_of.join(" or "),
                ));
            }
        }

        let mut path = format!("{}{}", API_PREFIX, self.template);
        let mut query = Vec::new();
        let mut body = Map::new();
        let mut planning = Map::new();
        let mut custom = Map::new();
        let mut consumed: HashSet<&str> = HashSet::new();

        for spec in self.params {
            consumed.insert(spec.name);
            if let Some(alias) = spec.alias {
                consumed.insert(alias);
            }

            let value = match spec.lookup(args) {
                Some(raw) => spec.accept(raw)?,
                None => match spec.default {
                    Some(default) => Value::from(default),
                    None if spec.required => {
                        return Err(FreshError::missing_parameter(self.name, spec.name));
                    }
                    None => continue,
                },
            };
            if spec.flag && value == Value::Bool(false) {
                continue;
            }

            match spec.placement {
                Placement::Path => {
                    let slot = format!("{{{}}}", spec.name);
                    path = path.replace(&slot, &urlencoding::encode(&render(&value)));
                }
                Placement::Query => query.push((spec.name.to_string(), render(&value))),
                Placement::Body => {
                    body.insert(spec.name.to_string(), value);
                }
                Placement::Merge => {
                    if let Value::Object(entries) = value {
                        body.extend(entries);
                    }
                }
                Placement::Planning => {
                    planning.insert(spec.name.to_string(), json!({ "description": value }));
                }
                Placement::CustomField => {
                    custom.insert(spec.name.to_string(), value);
                }
                Placement::CustomFields => {
                    if let Value::Object(entries) = value {
                        custom.extend(entries);
                    }
                }
            }
        }

        for (key, value) in args {
            if consumed.contains(key.as_str()) || value.is_null() {
                continue;
            }
            if self.verb.has_body() {
                body.entry(key.clone()).or_insert_with(|| value.clone());
            } else {
                query.push((key.clone(), render(value)));
            }
        }

        if !planning.is_empty() {
            body.insert("planning_fields".into(), Value::Object(planning));
        }
        if !custom.is_empty() {
            body.insert("custom_fields".into(), Value::Object(custom));
        }
        for (field, value) in self.fixed {
            body.insert((*field).to_string(), Value::from(*value));
        }

        let body = (self.verb.has_body() && !body.is_empty()).then_some(Value::Object(body));

        Ok(RequestPlan {
            tool: self.name,
            verb: self.verb,
            path,
            query,
            body,
        })
    }
}
