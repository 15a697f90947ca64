use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct BindRequestResource {
    #[validate(length(min = 1))]
    pub service_id: String,

    #[validate(length(min = 1))]
    pub plan_id: String,

    #[serde(default)]
    pub app_guid: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub bind_resource: Option<Value>,

    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub parameters: Option<Value>,
}
