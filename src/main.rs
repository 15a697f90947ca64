use std::{error::Error, path::PathBuf};

use axum::Router;
use clap::Parser;
use compose_service_broker::{
    broker::{
        build_broker_router,
        interfaces::rest::resources::{
            bind_request_resource::BindRequestResource,
            binding_resource::BindingResource,
            broker_error_response_resource::BrokerErrorResponseResource,
            catalog_resource::{CatalogResource, PlanResource, ServiceResource},
            last_operation_resource::LastOperationResource,
            operation_resource::{EmptyResource, OperationResource},
            provision_request_resource::ProvisionRequestResource,
            update_request_resource::{PreviousValuesResource, UpdateRequestResource},
        },
    },
    catalog::infrastructure::file::json_catalog_file_loader::load_catalog_file,
    config::{app_config::AppConfig, logging::init_logging},
    shared::interfaces::rest::openapi::security::BasicSecurityAddon,
};
use dotenvy::dotenv;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Parser)]
#[command(name = "compose-service-broker", about = "Open Service Broker for Compose deployments")]
struct Cli {
    /// Location of the catalog file
    #[arg(long, default_value = "./catalog.json")]
    catalog: PathBuf,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        compose_service_broker::broker::interfaces::rest::controllers::service_broker_rest_controller::get_catalog,
        compose_service_broker::broker::interfaces::rest::controllers::service_broker_rest_controller::provision_service_instance,
        compose_service_broker::broker::interfaces::rest::controllers::service_broker_rest_controller::update_service_instance,
        compose_service_broker::broker::interfaces::rest::controllers::service_broker_rest_controller::deprovision_service_instance,
        compose_service_broker::broker::interfaces::rest::controllers::service_broker_rest_controller::get_last_operation,
        compose_service_broker::broker::interfaces::rest::controllers::service_broker_rest_controller::bind_service_instance,
        compose_service_broker::broker::interfaces::rest::controllers::service_broker_rest_controller::unbind_service_instance
    ),
    components(
        schemas(
            CatalogResource,
            ServiceResource,
            PlanResource,
            ProvisionRequestResource,
            UpdateRequestResource,
            PreviousValuesResource,
            BindRequestResource,
            BindingResource,
            OperationResource,
            LastOperationResource,
            EmptyResource,
            BrokerErrorResponseResource
        )
    ),
    tags(
        (name = "service-broker", description = "Open Service Broker API v2 lifecycle for Compose deployments")
    ),
    modifiers(&BasicSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    init_logging(config.log_level);

    let catalog = load_catalog_file(&cli.catalog).await?;
    let broker_router = build_broker_router(&config, catalog).await?;

    let app = Router::new()
        .merge(broker_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(port = config.port, "service broker listening");
    info!(
        "Swagger UI available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app).await?;
    Ok(())
}
