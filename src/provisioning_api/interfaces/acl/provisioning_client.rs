use async_trait::async_trait;

use crate::provisioning_api::domain::model::{
    commands::{
        create_deployment_command::CreateDeploymentCommand,
        create_whitelist_entry_command::CreateWhitelistEntryCommand,
        patch_deployment_command::PatchDeploymentCommand,
        restore_backup_command::RestoreBackupCommand,
        scale_deployment_command::ScaleDeploymentCommand,
    },
    entities::{
        account::Account, backup::Backup, cluster::Cluster, deployment::Deployment,
        recipe::Recipe,
    },
    enums::provisioning_api_error::ProvisioningApiError,
};

/// `get_deployment_by_name` must report an absent deployment as `NotFound`.
#[async_trait]
pub trait ProvisioningClient: Send + Sync {
    async fn get_account(&self) -> Result<Account, ProvisioningApiError>;

    async fn get_cluster_by_name(&self, name: &str) -> Result<Cluster, ProvisioningApiError>;

    async fn create_deployment(
        &self,
        command: &CreateDeploymentCommand,
    ) -> Result<Deployment, ProvisioningApiError>;

    async fn deprovision_deployment(
        &self,
        deployment_id: &str,
    ) -> Result<Recipe, ProvisioningApiError>;

    async fn get_deployment_by_name(&self, name: &str) -> Result<Deployment, ProvisioningApiError>;

    async fn patch_deployment(
        &self,
        command: &PatchDeploymentCommand,
    ) -> Result<Deployment, ProvisioningApiError>;

    async fn set_scalings(
        &self,
        command: &ScaleDeploymentCommand,
    ) -> Result<Recipe, ProvisioningApiError>;

    async fn get_recipe(&self, recipe_id: &str) -> Result<Recipe, ProvisioningApiError>;

    /// `Ok(None)` means the service accepted the call but returned no pending recipe.
    async fn create_deployment_whitelist(
        &self,
        deployment_id: &str,
        command: &CreateWhitelistEntryCommand,
    ) -> Result<Option<Recipe>, ProvisioningApiError>;

    async fn get_backups_for_deployment(
        &self,
        deployment_id: &str,
    ) -> Result<Vec<Backup>, ProvisioningApiError>;

    async fn restore_backup(
        &self,
        command: &RestoreBackupCommand,
    ) -> Result<Deployment, ProvisioningApiError>;
}
