use serde::Deserialize;

use crate::catalog::domain::model::{
    entities::service::Service, enums::catalog_domain_error::CatalogDomainError,
};

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogDomainError> {
        let catalog: Catalog = serde_json::from_str(raw)
            .map_err(|e| CatalogDomainError::InvalidCatalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn get_service(&self, service_id: &str) -> Result<&Service, CatalogDomainError> {
        self.services
            .iter()
            .find(|service| service.id == service_id)
            .ok_or_else(|| CatalogDomainError::ServiceNotFound(service_id.to_string()))
    }

    fn validate(&self) -> Result<(), CatalogDomainError> {
        for service in &self.services {
            if service.id.trim().is_empty() {
                return Err(CatalogDomainError::InvalidCatalog(format!(
                    "service '{}' has an empty id",
                    service.name
                )));
            }

            for plan in &service.plans {
                if plan.compose.units == 0 {
                    return Err(CatalogDomainError::InvalidCatalog(format!(
                        "plan '{}' of service '{}' must have at least one unit",
                        plan.id, service.id
                    )));
                }
                if plan.compose.database_type.trim().is_empty() {
                    return Err(CatalogDomainError::InvalidCatalog(format!(
                        "plan '{}' of service '{}' has no databaseType",
                        plan.id, service.id
                    )));
                }
            }
        }

        Ok(())
    }
}
