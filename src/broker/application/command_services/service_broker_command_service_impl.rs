use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    broker::{
        application::lifecycle::{
            backup_selector::newest_restorable, deployment_locator::locate_deployment,
            pending_rollback::PendingRollback,
        },
        domain::{
            model::{
                commands::{
                    bind_instance_command::BindInstanceCommand,
                    deprovision_instance_command::DeprovisionInstanceCommand,
                    provision_instance_command::ProvisionInstanceCommand,
                    unbind_instance_command::UnbindInstanceCommand,
                    update_instance_command::UpdateInstanceCommand,
                },
                entities::{broker_settings::BrokerSettings, operation_data::OperationData},
                enums::broker_domain_error::BrokerDomainError,
                value_objects::instance_name::InstanceName,
            },
            services::service_broker_command_service::ServiceBrokerCommandService,
        },
    },
    catalog::domain::model::entities::{catalog::Catalog, plan::Plan},
    credentials::{
        domain::model::entities::binding_credentials::BindingCredentials,
        interfaces::acl::credential_provider::CredentialProvider,
    },
    provisioning_api::{
        domain::model::{
            commands::{
                create_deployment_command::CreateDeploymentCommand,
                create_whitelist_entry_command::CreateWhitelistEntryCommand,
                patch_deployment_command::PatchDeploymentCommand,
                restore_backup_command::RestoreBackupCommand,
                scale_deployment_command::ScaleDeploymentCommand,
            },
            entities::deployment::Deployment,
            enums::provisioning_api_error::ProvisioningApiError,
        },
        interfaces::acl::provisioning_client::ProvisioningClient,
    },
};

pub const DATACENTER: &str = "aws:eu-west-1";

pub struct ServiceBrokerCommandServiceImpl {
    provisioning_client: Arc<dyn ProvisioningClient>,
    credential_provider: Arc<dyn CredentialProvider>,
    catalog: Arc<Catalog>,
    settings: BrokerSettings,
}

impl ServiceBrokerCommandServiceImpl {
    pub fn new(
        provisioning_client: Arc<dyn ProvisioningClient>,
        credential_provider: Arc<dyn CredentialProvider>,
        catalog: Arc<Catalog>,
        settings: BrokerSettings,
    ) -> Self {
        Self {
            provisioning_client,
            credential_provider,
            catalog,
            settings,
        }
    }

    fn instance_name(&self, instance_id: &str) -> Result<InstanceName, BrokerDomainError> {
        InstanceName::new(&self.settings.db_prefix, instance_id)
    }

    async fn create_blank_deployment(
        &self,
        instance_name: &InstanceName,
        plan: &Plan,
        space_id: &str,
    ) -> Result<Deployment, BrokerDomainError> {
        let command = CreateDeploymentCommand {
            name: instance_name.value().to_string(),
            account_id: self.settings.account_id.clone(),
            datacenter: DATACENTER.to_string(),
            database_type: plan.database_type().to_string(),
            units: plan.units(),
            ssl: true,
            cluster_id: self.settings.cluster_id.clone(),
            customer_billing_code: space_id.to_string(),
        };

        Ok(self.provisioning_client.create_deployment(&command).await?)
    }

    async fn restore_from_latest_snapshot(
        &self,
        source_instance_id: &str,
        instance_name: &InstanceName,
        plan: &Plan,
        space_id: &str,
    ) -> Result<Deployment, BrokerDomainError> {
        let source_name = self.instance_name(source_instance_id)?;
        let source = match self
            .provisioning_client
            .get_deployment_by_name(source_name.value())
            .await
        {
            Ok(deployment) => deployment,
            Err(ProvisioningApiError::NotFound(_)) => {
                return Err(BrokerDomainError::RestoreSourceNotFound(
                    source_instance_id.to_string(),
                ));
            }
            Err(error) => return Err(error.into()),
        };

        if source.customer_billing_code != space_id {
            return Err(BrokerDomainError::RestoreConstraintViolation(
                "you are only allowed to restore from backup to the same space".to_string(),
            ));
        }
        if source.deployment_type != plan.database_type() {
            return Err(BrokerDomainError::RestoreConstraintViolation(
                "you are only allowed to restore a backup from the same service type".to_string(),
            ));
        }

        let backups = self
            .provisioning_client
            .get_backups_for_deployment(&source.id)
            .await?;
        let backup =
            newest_restorable(&backups).ok_or(BrokerDomainError::NoRestorableSnapshot)?;

        Ok(self
            .provisioning_client
            .restore_backup(&RestoreBackupCommand {
                deployment_id: source.id.clone(),
                backup_id: backup.id.clone(),
                name: instance_name.value().to_string(),
                datacenter: DATACENTER.to_string(),
                ssl: true,
                cluster_id: self.settings.cluster_id.clone(),
            })
            .await?)
    }

    async fn assign_billing_code(
        &self,
        restored: Deployment,
        space_id: &str,
    ) -> Result<Deployment, BrokerDomainError> {
        let mut deployment = self
            .provisioning_client
            .patch_deployment(&PatchDeploymentCommand {
                deployment_id: restored.id.clone(),
                customer_billing_code: space_id.to_string(),
            })
            .await?;

        // The patch response does not carry the recipe that is restoring the data.
        deployment.provision_recipe_id = restored.provision_recipe_id;
        Ok(deployment)
    }

    async fn complete_provision(
        &self,
        deployment: Deployment,
        restored: bool,
        space_id: &str,
    ) -> Result<String, BrokerDomainError> {
        let deployment = if restored {
            self.assign_billing_code(deployment, space_id).await?
        } else {
            deployment
        };

        self.finish_provision(&deployment).await
    }

    async fn finish_provision(&self, deployment: &Deployment) -> Result<String, BrokerDomainError> {
        let mut whitelist_recipe_ids = Vec::with_capacity(self.settings.ip_whitelist.len());

        for ip in &self.settings.ip_whitelist {
            let recipe = self
                .provisioning_client
                .create_deployment_whitelist(&deployment.id, &CreateWhitelistEntryCommand::for_ip(ip))
                .await?
                .ok_or_else(|| {
                    BrokerDomainError::MalformedProviderResponse(
                        "no pending whitelist recipe received".to_string(),
                    )
                })?;

            if recipe.id.is_empty() {
                return Err(BrokerDomainError::MalformedProviderResponse(
                    "invalid whitelist recipe ID".to_string(),
                ));
            }

            info!(
                deployment_id = %deployment.id,
                ip = %ip,
                recipe_id = %recipe.id,
                "whitelist entry requested"
            );
            whitelist_recipe_ids.push(recipe.id);
        }

        OperationData::provision(deployment.provision_recipe_id.clone(), whitelist_recipe_ids)
            .encode()
    }

    async fn locate(&self, instance_id: &str) -> Result<Deployment, BrokerDomainError> {
        let instance_name = self.instance_name(instance_id)?;
        locate_deployment(self.provisioning_client.as_ref(), &instance_name).await
    }

    async fn locate_bindable(&self, instance_id: &str) -> Result<Deployment, BrokerDomainError> {
        let deployment = self.locate(instance_id).await?;
        if !deployment.has_endpoint() {
            return Err(BrokerDomainError::ConnectionStringMissing);
        }
        Ok(deployment)
    }
}

#[async_trait]
impl ServiceBrokerCommandService for ServiceBrokerCommandServiceImpl {
    async fn handle_provision(
        &self,
        command: ProvisionInstanceCommand,
    ) -> Result<String, BrokerDomainError> {
        debug!(
            instance_id = command.instance_id(),
            service_id = command.service_id(),
            plan_id = command.plan_id(),
            accepts_incomplete = command.accepts_incomplete(),
            "provision"
        );

        if !command.accepts_incomplete() {
            return Err(BrokerDomainError::AsyncRequired);
        }

        let instance_name = self.instance_name(command.instance_id())?;
        let plan = self
            .catalog
            .get_service(command.service_id())?
            .get_plan(command.plan_id())?;

        let restore_source = command.parameters().restore_from_latest_snapshot_of();
        let deployment = match restore_source {
            Some(source_instance_id) => {
                debug!(
                    instance_id = command.instance_id(),
                    restore_from = source_instance_id,
                    "provisioning from latest snapshot"
                );
                self.restore_from_latest_snapshot(
                    source_instance_id,
                    &instance_name,
                    plan,
                    command.space_id(),
                )
                .await?
            }
            None => {
                debug!(instance_id = command.instance_id(), "provisioning blank deployment");
                self.create_blank_deployment(&instance_name, plan, command.space_id())
                    .await?
            }
        };

        let rollback = PendingRollback::arm(
            self.provisioning_client.clone(),
            &deployment.id,
            &instance_name,
        );

        match self
            .complete_provision(deployment, restore_source.is_some(), command.space_id())
            .await
        {
            Ok(token) => {
                rollback.commit();
                Ok(token)
            }
            Err(error) => {
                rollback.run().await;
                Err(error)
            }
        }
    }

    async fn handle_deprovision(
        &self,
        command: DeprovisionInstanceCommand,
    ) -> Result<String, BrokerDomainError> {
        debug!(
            instance_id = command.instance_id(),
            accepts_incomplete = command.accepts_incomplete(),
            "deprovision"
        );

        if !command.accepts_incomplete() {
            return Err(BrokerDomainError::AsyncRequired);
        }

        let deployment = self.locate(command.instance_id()).await?;
        let recipe = self
            .provisioning_client
            .deprovision_deployment(&deployment.id)
            .await?;

        OperationData::deprovision(recipe.id).encode()
    }

    async fn handle_update(
        &self,
        command: UpdateInstanceCommand,
    ) -> Result<String, BrokerDomainError> {
        debug!(
            instance_id = command.instance_id(),
            plan_id = command.plan_id(),
            previous_plan_id = command.previous_plan_id(),
            accepts_incomplete = command.accepts_incomplete(),
            "update"
        );

        if !command.accepts_incomplete() {
            return Err(BrokerDomainError::AsyncRequired);
        }
        if command.changes_plan() {
            return Err(BrokerDomainError::PlanChangeNotSupported);
        }

        let plan = self
            .catalog
            .get_service(command.service_id())?
            .get_plan(command.plan_id())?;
        let deployment = self.locate(command.instance_id()).await?;

        let recipe = self
            .provisioning_client
            .set_scalings(&ScaleDeploymentCommand {
                deployment_id: deployment.id.clone(),
                units: plan.units(),
            })
            .await?;

        OperationData::update(recipe.id).encode()
    }

    async fn handle_bind(
        &self,
        command: BindInstanceCommand,
    ) -> Result<BindingCredentials, BrokerDomainError> {
        debug!(
            instance_id = command.instance_id(),
            binding_id = command.binding_id(),
            service_id = command.service_id(),
            "bind"
        );

        let deployment = self.locate_bindable(command.instance_id()).await?;
        let engine = self.credential_provider.engine_for(&deployment)?;

        Ok(engine
            .generate_credentials(command.instance_id(), command.binding_id())
            .await?)
    }

    async fn handle_unbind(&self, command: UnbindInstanceCommand) -> Result<(), BrokerDomainError> {
        debug!(
            instance_id = command.instance_id(),
            binding_id = command.binding_id(),
            "unbind"
        );

        let deployment = self.locate_bindable(command.instance_id()).await?;
        let engine = self.credential_provider.engine_for(&deployment)?;

        Ok(engine
            .revoke_credentials(command.instance_id(), command.binding_id())
            .await?)
    }
}
