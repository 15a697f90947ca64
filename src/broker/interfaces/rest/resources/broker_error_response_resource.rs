use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body in the shape platforms expect; both fields absent renders as `{}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct BrokerErrorResponseResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BrokerErrorResponseResource {
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            error: None,
            description: Some(description.into()),
        }
    }
}
