use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema, IntoParams)]
pub struct LifecycleQueryResource {
    pub accepts_incomplete: Option<bool>,
    pub service_id: Option<String>,
    pub plan_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema, IntoParams)]
pub struct LastOperationQueryResource {
    pub operation: Option<String>,
    pub service_id: Option<String>,
    pub plan_id: Option<String>,
}
