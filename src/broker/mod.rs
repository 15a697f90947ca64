use std::{sync::Arc, time::Duration};

use axum::{Router, middleware};

use crate::{
    broker::{
        application::{
            command_services::service_broker_command_service_impl::ServiceBrokerCommandServiceImpl,
            lifecycle::broker_settings_resolver::resolve_broker_settings,
            query_services::service_broker_query_service_impl::ServiceBrokerQueryServiceImpl,
        },
        interfaces::rest::controllers::service_broker_rest_controller::{
            ServiceBrokerRestControllerState, router,
        },
    },
    catalog::domain::model::entities::catalog::Catalog,
    config::app_config::AppConfig,
    credentials::{
        application::acl::credential_provider_impl::CredentialProviderImpl,
        infrastructure::mongodb::mongodb_document_store_connector_impl::MongoDbDocumentStoreConnectorImpl,
    },
    provisioning_api::application::acl::http_provisioning_client_impl::HttpProvisioningClientImpl,
    shared::interfaces::rest::middleware::basic_auth::{BasicAuthCredentials, require_basic_auth},
};

pub mod application;
pub mod domain;
pub mod interfaces;

const PROVISIONING_API_TIMEOUT: Duration = Duration::from_secs(60);

pub async fn build_broker_router(config: &AppConfig, catalog: Catalog) -> Result<Router, String> {
    let provisioning_client = Arc::new(
        HttpProvisioningClientImpl::new(
            &config.api_url,
            &config.api_token,
            PROVISIONING_API_TIMEOUT,
        )
        .map_err(|e| e.to_string())?,
    );

    let settings = resolve_broker_settings(provisioning_client.as_ref(), config)
        .await
        .map_err(|e| e.to_string())?;

    let catalog = Arc::new(catalog);
    let credential_provider = Arc::new(CredentialProviderImpl::new(Arc::new(
        MongoDbDocumentStoreConnectorImpl::new(),
    )));

    let command_service = Arc::new(ServiceBrokerCommandServiceImpl::new(
        provisioning_client.clone(),
        credential_provider,
        catalog.clone(),
        settings,
    ));
    let query_service = Arc::new(ServiceBrokerQueryServiceImpl::new(
        provisioning_client,
        catalog,
    ));

    let credentials = BasicAuthCredentials::new(&config.username, &config.password);

    Ok(router(ServiceBrokerRestControllerState {
        command_service,
        query_service,
    })
    .layer(middleware::from_fn_with_state(credentials, require_basic_auth)))
}
