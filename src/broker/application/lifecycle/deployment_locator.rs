use crate::{
    broker::domain::model::{
        enums::broker_domain_error::BrokerDomainError, value_objects::instance_name::InstanceName,
    },
    provisioning_api::{
        domain::model::{
            entities::deployment::Deployment,
            enums::provisioning_api_error::ProvisioningApiError,
        },
        interfaces::acl::provisioning_client::ProvisioningClient,
    },
};

pub async fn locate_deployment(
    client: &dyn ProvisioningClient,
    instance_name: &InstanceName,
) -> Result<Deployment, BrokerDomainError> {
    match client.get_deployment_by_name(instance_name.value()).await {
        Ok(deployment) => Ok(deployment),
        Err(ProvisioningApiError::NotFound(_)) => Err(BrokerDomainError::InstanceNotFound),
        Err(error) => Err(error.into()),
    }
}
