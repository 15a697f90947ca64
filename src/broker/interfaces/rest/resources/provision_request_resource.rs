use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ProvisionRequestResource {
    #[validate(length(min = 1))]
    pub service_id: String,

    #[validate(length(min = 1))]
    pub plan_id: String,

    #[serde(default)]
    pub organization_guid: String,

    #[serde(default)]
    pub space_guid: String,

    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub parameters: Option<Value>,

    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub context: Option<Value>,
}
