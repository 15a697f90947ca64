use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::catalog::domain::model::entities::{catalog::Catalog, plan::Plan, service::Service};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PlanResource {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ServiceResource {
    pub id: String,
    pub name: String,
    pub description: String,
    pub bindable: bool,
    pub plan_updateable: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
    pub plans: Vec<PlanResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CatalogResource {
    pub services: Vec<ServiceResource>,
}

impl From<&Plan> for PlanResource {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id.clone(),
            name: plan.name.clone(),
            description: plan.description.clone(),
            free: plan.free,
            bindable: plan.bindable,
            metadata: plan.metadata.clone(),
        }
    }
}

impl From<&Service> for ServiceResource {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id.clone(),
            name: service.name.clone(),
            description: service.description.clone(),
            bindable: service.bindable,
            plan_updateable: service.plan_updateable,
            tags: service.tags.clone(),
            requires: service.requires.clone(),
            metadata: service.metadata.clone(),
            plans: service.plans.iter().map(PlanResource::from).collect(),
        }
    }
}

impl From<&Catalog> for CatalogResource {
    fn from(catalog: &Catalog) -> Self {
        Self {
            services: catalog.services.iter().map(ServiceResource::from).collect(),
        }
    }
}
