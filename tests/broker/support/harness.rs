use std::sync::Arc;

use compose_service_broker::{
    broker::{
        application::{
            command_services::service_broker_command_service_impl::ServiceBrokerCommandServiceImpl,
            query_services::service_broker_query_service_impl::ServiceBrokerQueryServiceImpl,
        },
        domain::model::entities::broker_settings::BrokerSettings,
        interfaces::rest::controllers::service_broker_rest_controller::ServiceBrokerRestControllerState,
    },
    credentials::application::acl::credential_provider_impl::CredentialProviderImpl,
};

use super::{
    fakes::{FakeDocumentStoreConnector, FakeProvisioningClient},
    fixtures::{DB_PREFIX, test_catalog},
};

pub struct BrokerTestHarness {
    pub provisioning_client: Arc<FakeProvisioningClient>,
    pub document_store: Arc<FakeDocumentStoreConnector>,
    pub command_service: Arc<ServiceBrokerCommandServiceImpl>,
    pub query_service: Arc<ServiceBrokerQueryServiceImpl>,
}

impl BrokerTestHarness {
    pub fn controller_state(&self) -> ServiceBrokerRestControllerState {
        ServiceBrokerRestControllerState {
            command_service: self.command_service.clone(),
            query_service: self.query_service.clone(),
        }
    }
}

pub fn create_harness(ip_whitelist: &[&str]) -> BrokerTestHarness {
    create_harness_with_settings(BrokerSettings {
        db_prefix: DB_PREFIX.to_string(),
        ip_whitelist: ip_whitelist.iter().map(|ip| ip.to_string()).collect(),
        account_id: "account-1".to_string(),
        cluster_id: None,
    })
}

pub fn create_harness_with_settings(settings: BrokerSettings) -> BrokerTestHarness {
    let provisioning_client = Arc::new(FakeProvisioningClient::new());
    let document_store = Arc::new(FakeDocumentStoreConnector::with_databases(&[
        "admin", "local",
    ]));
    let catalog = Arc::new(test_catalog());

    let command_service = Arc::new(ServiceBrokerCommandServiceImpl::new(
        provisioning_client.clone(),
        Arc::new(CredentialProviderImpl::new(document_store.clone())),
        catalog.clone(),
        settings,
    ));
    let query_service = Arc::new(ServiceBrokerQueryServiceImpl::new(
        provisioning_client.clone(),
        catalog,
    ));

    BrokerTestHarness {
        provisioning_client,
        document_store,
        command_service,
        query_service,
    }
}
