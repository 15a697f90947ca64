use std::path::Path;

use crate::catalog::domain::model::{
    entities::catalog::Catalog, enums::catalog_domain_error::CatalogDomainError,
};

pub async fn load_catalog_file(path: &Path) -> Result<Catalog, CatalogDomainError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CatalogDomainError::Unreadable(format!("{}: {e}", path.display())))?;

    Catalog::from_json(&raw)
}
