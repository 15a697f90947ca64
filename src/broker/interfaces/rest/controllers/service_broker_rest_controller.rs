use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
};
use validator::Validate;

use crate::broker::{
    domain::{
        model::{
            commands::{
                bind_instance_command::BindInstanceCommand,
                deprovision_instance_command::DeprovisionInstanceCommand,
                provision_instance_command::ProvisionInstanceCommand,
                unbind_instance_command::UnbindInstanceCommand,
                update_instance_command::UpdateInstanceCommand,
            },
            enums::broker_domain_error::BrokerDomainError,
            queries::last_operation_query::LastOperationQuery,
        },
        services::{
            service_broker_command_service::ServiceBrokerCommandService,
            service_broker_query_service::ServiceBrokerQueryService,
        },
    },
    interfaces::rest::resources::{
        bind_request_resource::BindRequestResource,
        binding_resource::BindingResource,
        broker_error_response_resource::BrokerErrorResponseResource,
        catalog_resource::CatalogResource,
        last_operation_resource::LastOperationResource,
        lifecycle_query_resource::{LastOperationQueryResource, LifecycleQueryResource},
        operation_resource::{EmptyResource, OperationResource},
        provision_request_resource::ProvisionRequestResource,
        update_request_resource::UpdateRequestResource,
    },
};

type ErrorResponse = (StatusCode, Json<BrokerErrorResponseResource>);

#[derive(Clone)]
pub struct ServiceBrokerRestControllerState {
    pub command_service: Arc<dyn ServiceBrokerCommandService>,
    pub query_service: Arc<dyn ServiceBrokerQueryService>,
}

pub fn router(state: ServiceBrokerRestControllerState) -> Router {
    Router::new()
        .route("/v2/catalog", get(get_catalog))
        .route(
            "/v2/service_instances/:instance_id",
            put(provision_service_instance)
                .patch(update_service_instance)
                .delete(deprovision_service_instance),
        )
        .route(
            "/v2/service_instances/:instance_id/last_operation",
            get(get_last_operation),
        )
        .route(
            "/v2/service_instances/:instance_id/service_bindings/:binding_id",
            put(bind_service_instance).delete(unbind_service_instance),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/v2/catalog",
    tag = "service-broker",
    responses(
        (status = 200, description = "Services and plans offered by the broker", body = CatalogResource),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = []))
)]
pub async fn get_catalog(
    State(state): State<ServiceBrokerRestControllerState>,
) -> (StatusCode, Json<CatalogResource>) {
    let catalog = state.query_service.catalog();
    (StatusCode::OK, Json(CatalogResource::from(catalog.as_ref())))
}

#[utoipa::path(
    put,
    path = "/v2/service_instances/{instance_id}",
    tag = "service-broker",
    request_body = ProvisionRequestResource,
    params(
        ("instance_id" = String, Path, description = "Service instance identifier"),
        LifecycleQueryResource
    ),
    responses(
        (status = 202, description = "Provisioning started", body = OperationResource),
        (status = 400, description = "Invalid request", body = BrokerErrorResponseResource),
        (status = 422, description = "Client must accept asynchronous operations", body = BrokerErrorResponseResource),
        (status = 500, description = "Provisioning failure", body = BrokerErrorResponseResource)
    ),
    security(("basic_auth" = []))
)]
pub async fn provision_service_instance(
    State(state): State<ServiceBrokerRestControllerState>,
    Path(instance_id): Path<String>,
    Query(query): Query<LifecycleQueryResource>,
    Json(request): Json<ProvisionRequestResource>,
) -> Result<(StatusCode, Json<OperationResource>), ErrorResponse> {
    validate(&request)?;

    let command = ProvisionInstanceCommand::new(
        instance_id,
        request.service_id,
        request.plan_id,
        request.space_guid,
        query.accepts_incomplete.unwrap_or(false),
        request.parameters.as_ref(),
    )
    .map_err(|e| map_domain_error(e, false))?;

    let operation = state
        .command_service
        .handle_provision(command)
        .await
        .map_err(|e| map_domain_error(e, false))?;

    Ok((StatusCode::ACCEPTED, Json(OperationResource { operation })))
}

#[utoipa::path(
    patch,
    path = "/v2/service_instances/{instance_id}",
    tag = "service-broker",
    request_body = UpdateRequestResource,
    params(
        ("instance_id" = String, Path, description = "Service instance identifier"),
        LifecycleQueryResource
    ),
    responses(
        (status = 202, description = "Update started", body = OperationResource),
        (status = 400, description = "Invalid request or plan change", body = BrokerErrorResponseResource),
        (status = 404, description = "Instance does not exist", body = BrokerErrorResponseResource),
        (status = 422, description = "Client must accept asynchronous operations", body = BrokerErrorResponseResource),
        (status = 500, description = "Update failure", body = BrokerErrorResponseResource)
    ),
    security(("basic_auth" = []))
)]
pub async fn update_service_instance(
    State(state): State<ServiceBrokerRestControllerState>,
    Path(instance_id): Path<String>,
    Query(query): Query<LifecycleQueryResource>,
    Json(request): Json<UpdateRequestResource>,
) -> Result<(StatusCode, Json<OperationResource>), ErrorResponse> {
    validate(&request)?;

    let (plan_id, previous_plan_id) = request.plan_ids().ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(BrokerErrorResponseResource::described("plan_id is required")),
        )
    })?;

    let command = UpdateInstanceCommand::new(
        instance_id,
        request.service_id,
        plan_id,
        previous_plan_id,
        query.accepts_incomplete.unwrap_or(false),
    );

    let operation = state
        .command_service
        .handle_update(command)
        .await
        .map_err(|e| map_domain_error(e, false))?;

    Ok((StatusCode::ACCEPTED, Json(OperationResource { operation })))
}

#[utoipa::path(
    delete,
    path = "/v2/service_instances/{instance_id}",
    tag = "service-broker",
    params(
        ("instance_id" = String, Path, description = "Service instance identifier"),
        LifecycleQueryResource
    ),
    responses(
        (status = 202, description = "Deprovisioning started", body = OperationResource),
        (status = 410, description = "Instance does not exist", body = BrokerErrorResponseResource),
        (status = 422, description = "Client must accept asynchronous operations", body = BrokerErrorResponseResource),
        (status = 500, description = "Deprovisioning failure", body = BrokerErrorResponseResource)
    ),
    security(("basic_auth" = []))
)]
pub async fn deprovision_service_instance(
    State(state): State<ServiceBrokerRestControllerState>,
    Path(instance_id): Path<String>,
    Query(query): Query<LifecycleQueryResource>,
) -> Result<(StatusCode, Json<OperationResource>), ErrorResponse> {
    let command =
        DeprovisionInstanceCommand::new(instance_id, query.accepts_incomplete.unwrap_or(false));

    let operation = state
        .command_service
        .handle_deprovision(command)
        .await
        .map_err(|e| map_domain_error(e, true))?;

    Ok((StatusCode::ACCEPTED, Json(OperationResource { operation })))
}

#[utoipa::path(
    get,
    path = "/v2/service_instances/{instance_id}/last_operation",
    tag = "service-broker",
    params(
        ("instance_id" = String, Path, description = "Service instance identifier"),
        LastOperationQueryResource
    ),
    responses(
        (status = 200, description = "State of the pending operation", body = LastOperationResource),
        (status = 400, description = "Missing or undecodable operation", body = BrokerErrorResponseResource),
        (status = 500, description = "Provider failure", body = BrokerErrorResponseResource)
    ),
    security(("basic_auth" = []))
)]
pub async fn get_last_operation(
    State(state): State<ServiceBrokerRestControllerState>,
    Path(instance_id): Path<String>,
    Query(query): Query<LastOperationQueryResource>,
) -> Result<(StatusCode, Json<LastOperationResource>), ErrorResponse> {
    let operation = query.operation.filter(|operation| !operation.is_empty()).ok_or_else(|| {
        map_domain_error(
            BrokerDomainError::InvalidOperationData("operation is required".to_string()),
            false,
        )
    })?;

    let last_operation = state
        .query_service
        .handle_last_operation(LastOperationQuery::new(instance_id, operation))
        .await
        .map_err(|e| map_domain_error(e, false))?;

    Ok((
        StatusCode::OK,
        Json(LastOperationResource {
            state: last_operation.state.as_str().to_string(),
            description: last_operation.description,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/v2/service_instances/{instance_id}/service_bindings/{binding_id}",
    tag = "service-broker",
    request_body = BindRequestResource,
    params(
        ("instance_id" = String, Path, description = "Service instance identifier"),
        ("binding_id" = String, Path, description = "Service binding identifier")
    ),
    responses(
        (status = 201, description = "Binding created", body = BindingResource),
        (status = 400, description = "Invalid request", body = BrokerErrorResponseResource),
        (status = 404, description = "Instance does not exist", body = BrokerErrorResponseResource),
        (status = 500, description = "Credential issuance failure", body = BrokerErrorResponseResource)
    ),
    security(("basic_auth" = []))
)]
pub async fn bind_service_instance(
    State(state): State<ServiceBrokerRestControllerState>,
    Path((instance_id, binding_id)): Path<(String, String)>,
    Json(request): Json<BindRequestResource>,
) -> Result<(StatusCode, Json<BindingResource>), ErrorResponse> {
    validate(&request)?;

    let credentials = state
        .command_service
        .handle_bind(BindInstanceCommand::new(
            instance_id,
            binding_id,
            request.service_id,
        ))
        .await
        .map_err(|e| map_domain_error(e, false))?;

    Ok((StatusCode::CREATED, Json(BindingResource { credentials })))
}

#[utoipa::path(
    delete,
    path = "/v2/service_instances/{instance_id}/service_bindings/{binding_id}",
    tag = "service-broker",
    params(
        ("instance_id" = String, Path, description = "Service instance identifier"),
        ("binding_id" = String, Path, description = "Service binding identifier")
    ),
    responses(
        (status = 200, description = "Binding removed", body = EmptyResource),
        (status = 410, description = "Instance does not exist", body = BrokerErrorResponseResource),
        (status = 500, description = "Credential revocation failure", body = BrokerErrorResponseResource)
    ),
    security(("basic_auth" = []))
)]
pub async fn unbind_service_instance(
    State(state): State<ServiceBrokerRestControllerState>,
    Path((instance_id, binding_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<EmptyResource>), ErrorResponse> {
    state
        .command_service
        .handle_unbind(UnbindInstanceCommand::new(instance_id, binding_id))
        .await
        .map_err(|e| map_domain_error(e, true))?;

    Ok((StatusCode::OK, Json(EmptyResource {})))
}

fn validate(request: &impl Validate) -> Result<(), ErrorResponse> {
    request.validate().map_err(|validation_error| {
        (
            StatusCode::BAD_REQUEST,
            Json(BrokerErrorResponseResource::described(
                validation_error.to_string(),
            )),
        )
    })
}

pub fn map_domain_error(error: BrokerDomainError, gone_when_missing: bool) -> ErrorResponse {
    let status = match &error {
        BrokerDomainError::AsyncRequired => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(BrokerErrorResponseResource {
                    error: Some("AsyncRequired".to_string()),
                    description: Some(error.to_string()),
                }),
            );
        }
        BrokerDomainError::InstanceNotFound if gone_when_missing => {
            return (StatusCode::GONE, Json(BrokerErrorResponseResource::default()));
        }
        BrokerDomainError::InstanceNotFound => StatusCode::NOT_FOUND,
        BrokerDomainError::PlanChangeNotSupported
        | BrokerDomainError::RestoreConstraintViolation(_)
        | BrokerDomainError::NoRestorableSnapshot
        | BrokerDomainError::RestoreSourceNotFound(_)
        | BrokerDomainError::InvalidInstanceName(_)
        | BrokerDomainError::InvalidOperationData(_)
        | BrokerDomainError::InvalidParameters(_)
        | BrokerDomainError::ServiceNotFound(_)
        | BrokerDomainError::PlanNotFound(_) => StatusCode::BAD_REQUEST,
        BrokerDomainError::ConnectionStringMissing
        | BrokerDomainError::CredentialEngineUnsupported(_)
        | BrokerDomainError::MalformedProviderResponse(_)
        | BrokerDomainError::ProviderError(_)
        | BrokerDomainError::InvalidCatalog(_)
        | BrokerDomainError::Credentials(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(BrokerErrorResponseResource::described(error.to_string())),
    )
}
