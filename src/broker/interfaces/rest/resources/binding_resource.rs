use serde::Serialize;
use utoipa::ToSchema;

use crate::credentials::domain::model::entities::binding_credentials::BindingCredentials;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BindingResource {
    #[schema(value_type = Object)]
    pub credentials: BindingCredentials,
}
