use async_trait::async_trait;

use crate::{
    broker::domain::model::{
        commands::{
            bind_instance_command::BindInstanceCommand,
            deprovision_instance_command::DeprovisionInstanceCommand,
            provision_instance_command::ProvisionInstanceCommand,
            unbind_instance_command::UnbindInstanceCommand,
            update_instance_command::UpdateInstanceCommand,
        },
        enums::broker_domain_error::BrokerDomainError,
    },
    credentials::domain::model::entities::binding_credentials::BindingCredentials,
};

#[async_trait]
pub trait ServiceBrokerCommandService: Send + Sync {
    async fn handle_provision(
        &self,
        command: ProvisionInstanceCommand,
    ) -> Result<String, BrokerDomainError>;

    async fn handle_deprovision(
        &self,
        command: DeprovisionInstanceCommand,
    ) -> Result<String, BrokerDomainError>;

    async fn handle_update(
        &self,
        command: UpdateInstanceCommand,
    ) -> Result<String, BrokerDomainError>;

    async fn handle_bind(
        &self,
        command: BindInstanceCommand,
    ) -> Result<BindingCredentials, BrokerDomainError>;

    async fn handle_unbind(&self, command: UnbindInstanceCommand) -> Result<(), BrokerDomainError>;
}
