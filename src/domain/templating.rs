// Template variable domain model
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariable {
    pub current: BTreeMap<String, serde_json::Value>,
    pub datasource: String,
    pub hide: u32,
    pub include_all: bool,
    pub label: String,
    pub multi: bool,
    pub name: String,
    pub options: Vec<serde_json::Value>,
    pub query: String,
    pub refresh: u32,
    pub regex: String,
    #[serde(rename = "type")]
    pub variable_type: String,
}

impl TemplateVariable {
    /// Query-backed variable, refreshed when the dashboard loads.
    pub fn query(
        name: String,
        label: String,
        query: String,
        datasource: String,
        regex: String,
        multi: bool,
        include_all: bool,
    ) -> Self {
        Self {
            current: BTreeMap::new(),
            datasource,
            hide: 0,
            include_all,
            label,
            multi,
            name,
            options: Vec::new(),
            query,
            refresh: 1,
            regex,
            variable_type: "query".to_string(),
        }
    }
}
