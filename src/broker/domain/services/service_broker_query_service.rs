use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    broker::domain::model::{
        entities::last_operation::LastOperation, enums::broker_domain_error::BrokerDomainError,
        queries::last_operation_query::LastOperationQuery,
    },
    catalog::domain::model::entities::catalog::Catalog,
};

#[async_trait]
pub trait ServiceBrokerQueryService: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;

    async fn handle_last_operation(
        &self,
        query: LastOperationQuery,
    ) -> Result<LastOperation, BrokerDomainError>;
}
