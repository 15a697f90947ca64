use serde::Deserialize;
use serde_json::Value;

use crate::catalog::domain::model::{
    entities::plan::Plan, enums::catalog_domain_error::CatalogDomainError,
};

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bindable: bool,
    #[serde(default)]
    pub plan_updateable: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub requires: Vec<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub plans: Vec<Plan>,
}

impl Service {
    pub fn get_plan(&self, plan_id: &str) -> Result<&Plan, CatalogDomainError> {
        self.plans
            .iter()
            .find(|plan| plan.id == plan_id)
            .ok_or_else(|| CatalogDomainError::PlanNotFound(plan_id.to_string()))
    }
}
