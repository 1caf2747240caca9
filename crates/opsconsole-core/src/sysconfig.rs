//! System configuration schema for the settings screens.
//!
//! The backend returns one flat row per configuration field. The settings
//! screen shows them grouped by `type`, one form section per group.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How a configuration value is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFieldType {
    #[default]
    Text,
    Password,
    Textarea,
}

impl ConfigFieldType {
    /// Infer the editor from the field name: API keys are masked, other
    /// keys (SSH keys, certificates) get a multi-line editor.
    pub fn infer(field_name: &str) -> Self {
        let lower = field_name.to_lowercase();
        if lower.contains("apikey") {
            ConfigFieldType::Password
        } else if lower.contains("key") {
            ConfigFieldType::Textarea
        } else {
            ConfigFieldType::Text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigItem {
    pub key: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<ConfigFieldType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigGroup {
    pub id: String,
    pub title: String,
    pub items: Vec<ConfigItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_save: Option<bool>,
}

/// One configuration row as the backend returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendConfig {
    pub id: u64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(rename = "type")]
    pub config_type: String,
    pub field_name: String,
    pub field_value: String,
    #[serde(default)]
    pub field_description: String,
    #[serde(default)]
    pub is_changed: bool,
}

/// Backend list response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigListResponse {
    #[serde(default)]
    pub count: u64,
    pub list: Vec<BackendConfig>,
}

/// Group backend rows by type, keeping the order in which types first appear
pub fn transform_config(rows: Vec<BackendConfig>) -> Vec<ConfigGroup> {
    let mut groups: Vec<ConfigGroup> = Vec::new();
    for row in rows {
        let item = ConfigItem {
            field_type: Some(ConfigFieldType::infer(&row.field_name)),
            key: row.field_name,
            value: row.field_value,
            description: Some(row.field_description),
            required: Some(true),
        };
        match groups.iter_mut().find(|g| g.id == group_id(&row.config_type)) {
            Some(group) => group.items.push(item),
            None => groups.push(ConfigGroup {
                id: group_id(&row.config_type),
                title: format!("{}Config", row.config_type),
                items: vec![item],
                group_save: Some(true),
            }),
        }
    }
    groups
}

fn group_id(config_type: &str) -> String {
    format!("{}-config", config_type)
}

/// Turn form field names into update parameter names: `SshKey` → `sshKeyValue`
pub fn to_update_params(values: BTreeMap<String, String>) -> BTreeMap<String, String> {
    values
        .into_iter()
        .map(|(key, value)| {
            let mut chars = key.chars();
            let camel: String = match chars.next() {
                Some(first) => first.to_lowercase().chain(chars).collect(),
                None => String::new(),
            };
            let name = if camel.ends_with("Value") {
                camel
            } else {
                format!("{}Value", camel)
            };
            (name, value)
        })
        .collect()
}
