use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct PreviousValuesResource {
    pub plan_id: Option<String>,
    pub service_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateRequestResource {
    #[validate(length(min = 1))]
    pub service_id: String,

    pub plan_id: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub parameters: Option<Value>,

    #[serde(default)]
    pub previous_values: Option<PreviousValuesResource>,
}

impl UpdateRequestResource {
    pub fn plan_ids(&self) -> Option<(String, String)> {
        let previous = self
            .previous_values
            .as_ref()
            .and_then(|values| values.plan_id.clone());

        match (self.plan_id.clone(), previous) {
            (Some(plan_id), Some(previous)) => Some((plan_id, previous)),
            (Some(plan_id), None) => Some((plan_id.clone(), plan_id)),
            (None, Some(previous)) => Some((previous.clone(), previous)),
            (None, None) => None,
        }
    }
}
