use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ComposePlanSettings {
    pub units: u32,
    #[serde(rename = "databaseType")]
    pub database_type: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub free: Option<bool>,
    #[serde(default)]
    pub bindable: Option<bool>,
    #[serde(default)]
    pub metadata: Option<Value>,
    pub compose: ComposePlanSettings,
}

impl Plan {
    pub fn units(&self) -> u32 {
        self.compose.units
    }

    pub fn database_type(&self) -> &str {
        &self.compose.database_type
    }
}
