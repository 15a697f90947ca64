use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::{
    broker::{
        application::lifecycle::recipe_status_aggregator::aggregate,
        domain::{
            model::{
                entities::{last_operation::LastOperation, operation_data::OperationData},
                enums::broker_domain_error::BrokerDomainError,
                queries::last_operation_query::LastOperationQuery,
            },
            services::service_broker_query_service::ServiceBrokerQueryService,
        },
    },
    catalog::domain::model::entities::catalog::Catalog,
    provisioning_api::interfaces::acl::provisioning_client::ProvisioningClient,
};

pub struct ServiceBrokerQueryServiceImpl {
    provisioning_client: Arc<dyn ProvisioningClient>,
    catalog: Arc<Catalog>,
}

impl ServiceBrokerQueryServiceImpl {
    pub fn new(provisioning_client: Arc<dyn ProvisioningClient>, catalog: Arc<Catalog>) -> Self {
        Self {
            provisioning_client,
            catalog,
        }
    }
}

#[async_trait]
impl ServiceBrokerQueryService for ServiceBrokerQueryServiceImpl {
    fn catalog(&self) -> Arc<Catalog> {
        self.catalog.clone()
    }

    async fn handle_last_operation(
        &self,
        query: LastOperationQuery,
    ) -> Result<LastOperation, BrokerDomainError> {
        let operation_data = OperationData::decode(query.operation())?;

        debug!(
            instance_id = query.instance_id(),
            operation = operation_data.operation_type.as_str(),
            recipe_id = %operation_data.recipe_id,
            "last operation"
        );

        aggregate(
            self.provisioning_client.as_ref(),
            &operation_data.recipe_id,
            &operation_data.whitelist_recipe_ids,
        )
        .await
    }
}
