use serde::{Deserialize, Deserializer, Serialize};

use crate::broker::domain::model::enums::{
    broker_domain_error::BrokerDomainError, operation_type::OperationType,
};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct OperationData {
    #[serde(rename = "type")]
    pub operation_type: OperationType,
    pub recipe_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub whitelist_recipe_ids: Vec<String>,
}

impl OperationData {
    pub fn provision(recipe_id: impl Into<String>, whitelist_recipe_ids: Vec<String>) -> Self {
        Self {
            operation_type: OperationType::Provision,
            recipe_id: recipe_id.into(),
            whitelist_recipe_ids,
        }
    }

    pub fn deprovision(recipe_id: impl Into<String>) -> Self {
        Self {
            operation_type: OperationType::Deprovision,
            recipe_id: recipe_id.into(),
            whitelist_recipe_ids: Vec::new(),
        }
    }

    pub fn update(recipe_id: impl Into<String>) -> Self {
        Self {
            operation_type: OperationType::Update,
            recipe_id: recipe_id.into(),
            whitelist_recipe_ids: Vec::new(),
        }
    }

    pub fn encode(&self) -> Result<String, BrokerDomainError> {
        serde_json::to_string(self).map_err(|e| BrokerDomainError::InvalidOperationData(e.to_string()))
    }

    /// Tokens issued before whitelisting existed carry no id list and decode to an empty one.
    pub fn decode(token: &str) -> Result<Self, BrokerDomainError> {
        serde_json::from_str(token).map_err(|e| BrokerDomainError::InvalidOperationData(e.to_string()))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
