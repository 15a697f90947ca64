use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use compose_service_broker::{
    credentials::domain::{
        model::{
            entities::database_user::DatabaseUser,
            enums::credentials_domain_error::CredentialsDomainError,
        },
        services::document_store_driver::{
            AdminConnection, DocumentStoreConnector, DocumentStoreSession,
        },
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
            entities::{
                account::Account, backup::Backup, cluster::Cluster, deployment::Deployment,
                recipe::Recipe,
            },
            enums::provisioning_api_error::ProvisioningApiError,
        },
        interfaces::acl::provisioning_client::ProvisioningClient,
    },
};

pub const CREATED_DEPLOYMENT_ID: &str = "deployment-1";
pub const CREATED_PROVISION_RECIPE_ID: &str = "provision-recipe-1";
pub const RESTORED_DEPLOYMENT_ID: &str = "restored-1";
pub const RESTORE_RECIPE_ID: &str = "restore-recipe-1";
pub const DEPROVISION_RECIPE_ID: &str = "deprovision-recipe-1";
pub const SCALING_RECIPE_ID: &str = "scaling-recipe-1";

#[derive(Default)]
struct FakeProvisioningClientState {
    deployments: HashMap<String, Deployment>,
    recipes: HashMap<String, Recipe>,
    backups: HashMap<String, Vec<Backup>>,
    created: Vec<CreateDeploymentCommand>,
    deprovisioned: Vec<String>,
    whitelist_calls: Vec<(String, CreateWhitelistEntryCommand)>,
    scalings: Vec<ScaleDeploymentCommand>,
    restores: Vec<RestoreBackupCommand>,
    patches: Vec<PatchDeploymentCommand>,
    requested_recipes: Vec<String>,
    whitelist_delay: Option<Duration>,
    whitelist_error_at: Option<usize>,
    whitelist_without_recipe_at: Option<usize>,
    whitelist_empty_recipe_at: Option<usize>,
    deprovision_error: Option<ProvisioningApiError>,
    lookup_error: Option<ProvisioningApiError>,
    patch_error: Option<ProvisioningApiError>,
    recipe_error: Option<ProvisioningApiError>,
}

pub struct FakeProvisioningClient {
    state: Mutex<FakeProvisioningClientState>,
}

impl FakeProvisioningClient {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeProvisioningClientState::default()),
        }
    }

    pub fn insert_deployment(&self, deployment: Deployment) {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.deployments.insert(deployment.name.clone(), deployment);
    }

    pub fn insert_recipe(&self, id: &str, status: &str, status_detail: &str) {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.recipes.insert(
            id.to_string(),
            Recipe {
                id: id.to_string(),
                status: status.to_string(),
                status_detail: status_detail.to_string(),
                ..Recipe::default()
            },
        );
    }

    pub fn insert_backups(&self, deployment_id: &str, backups: Vec<Backup>) {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.backups.insert(deployment_id.to_string(), backups);
    }

    pub fn delay_whitelist(&self, delay: Duration) {
        self.state.lock().expect("mutex poisoned").whitelist_delay = Some(delay);
    }

    pub fn fail_whitelist_at(&self, index: usize) {
        self.state.lock().expect("mutex poisoned").whitelist_error_at = Some(index);
    }

    pub fn omit_whitelist_recipe_at(&self, index: usize) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .whitelist_without_recipe_at = Some(index);
    }

    pub fn blank_whitelist_recipe_at(&self, index: usize) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .whitelist_empty_recipe_at = Some(index);
    }

    pub fn fail_deprovision(&self, error: ProvisioningApiError) {
        self.state.lock().expect("mutex poisoned").deprovision_error = Some(error);
    }

    pub fn fail_lookup(&self, error: ProvisioningApiError) {
        self.state.lock().expect("mutex poisoned").lookup_error = Some(error);
    }

    pub fn fail_patch(&self, error: ProvisioningApiError) {
        self.state.lock().expect("mutex poisoned").patch_error = Some(error);
    }

    pub fn fail_recipes(&self, error: ProvisioningApiError) {
        self.state.lock().expect("mutex poisoned").recipe_error = Some(error);
    }

    pub fn created(&self) -> Vec<CreateDeploymentCommand> {
        self.state.lock().expect("mutex poisoned").created.clone()
    }

    pub fn deprovisioned(&self) -> Vec<String> {
        self.state.lock().expect("mutex poisoned").deprovisioned.clone()
    }

    pub fn whitelist_calls(&self) -> Vec<(String, CreateWhitelistEntryCommand)> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .whitelist_calls
            .clone()
    }

    pub fn scalings(&self) -> Vec<ScaleDeploymentCommand> {
        self.state.lock().expect("mutex poisoned").scalings.clone()
    }

    pub fn restores(&self) -> Vec<RestoreBackupCommand> {
        self.state.lock().expect("mutex poisoned").restores.clone()
    }

    pub fn patches(&self) -> Vec<PatchDeploymentCommand> {
        self.state.lock().expect("mutex poisoned").patches.clone()
    }

    pub fn requested_recipes(&self) -> Vec<String> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .requested_recipes
            .clone()
    }
}

#[async_trait]
impl ProvisioningClient for FakeProvisioningClient {
    async fn get_account(&self) -> Result<Account, ProvisioningApiError> {
        Ok(Account {
            id: "account-1".to_string(),
            ..Account::default()
        })
    }

    async fn get_cluster_by_name(&self, name: &str) -> Result<Cluster, ProvisioningApiError> {
        Ok(Cluster {
            id: "cluster-1".to_string(),
            name: name.to_string(),
            ..Cluster::default()
        })
    }

    async fn create_deployment(
        &self,
        command: &CreateDeploymentCommand,
    ) -> Result<Deployment, ProvisioningApiError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.created.push(command.clone());

        let deployment = Deployment {
            id: CREATED_DEPLOYMENT_ID.to_string(),
            name: command.name.clone(),
            deployment_type: command.database_type.clone(),
            account_id: command.account_id.clone(),
            provision_recipe_id: CREATED_PROVISION_RECIPE_ID.to_string(),
            customer_billing_code: command.customer_billing_code.clone(),
            ..Deployment::default()
        };
        state
            .deployments
            .insert(deployment.name.clone(), deployment.clone());

        Ok(deployment)
    }

    async fn deprovision_deployment(
        &self,
        deployment_id: &str,
    ) -> Result<Recipe, ProvisioningApiError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.deprovisioned.push(deployment_id.to_string());

        if let Some(error) = state.deprovision_error.clone() {
            return Err(error);
        }

        Ok(Recipe {
            id: DEPROVISION_RECIPE_ID.to_string(),
            status: "running".to_string(),
            ..Recipe::default()
        })
    }

    async fn get_deployment_by_name(&self, name: &str) -> Result<Deployment, ProvisioningApiError> {
        let state = self.state.lock().expect("mutex poisoned");
        if let Some(error) = state.lookup_error.clone() {
            return Err(error);
        }

        state
            .deployments
            .get(name)
            .cloned()
            .ok_or_else(|| ProvisioningApiError::NotFound("deployment not found".to_string()))
    }

    async fn patch_deployment(
        &self,
        command: &PatchDeploymentCommand,
    ) -> Result<Deployment, ProvisioningApiError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.patches.push(command.clone());

        if let Some(error) = state.patch_error.clone() {
            return Err(error);
        }

        Ok(Deployment {
            id: command.deployment_id.clone(),
            customer_billing_code: command.customer_billing_code.clone(),
            ..Deployment::default()
        })
    }

    async fn set_scalings(
        &self,
        command: &ScaleDeploymentCommand,
    ) -> Result<Recipe, ProvisioningApiError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.scalings.push(command.clone());

        Ok(Recipe {
            id: SCALING_RECIPE_ID.to_string(),
            status: "running".to_string(),
            ..Recipe::default()
        })
    }

    async fn get_recipe(&self, recipe_id: &str) -> Result<Recipe, ProvisioningApiError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.requested_recipes.push(recipe_id.to_string());

        if let Some(error) = state.recipe_error.clone() {
            return Err(error);
        }

        state
            .recipes
            .get(recipe_id)
            .cloned()
            .ok_or_else(|| ProvisioningApiError::NotFound("recipe not found".to_string()))
    }

    async fn create_deployment_whitelist(
        &self,
        deployment_id: &str,
        command: &CreateWhitelistEntryCommand,
    ) -> Result<Option<Recipe>, ProvisioningApiError> {
        let delay = self.state.lock().expect("mutex poisoned").whitelist_delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.state.lock().expect("mutex poisoned");
        let index = state.whitelist_calls.len();
        state
            .whitelist_calls
            .push((deployment_id.to_string(), command.clone()));

        if state.whitelist_error_at == Some(index) {
            return Err(ProvisioningApiError::Remote(vec![
                "whitelist rejected".to_string(),
                "try again later".to_string(),
            ]));
        }
        if state.whitelist_without_recipe_at == Some(index) {
            return Ok(None);
        }
        if state.whitelist_empty_recipe_at == Some(index) {
            return Ok(Some(Recipe::default()));
        }

        Ok(Some(Recipe {
            id: format!("whitelist-recipe-{}", index + 1),
            status: "running".to_string(),
            ..Recipe::default()
        }))
    }

    async fn get_backups_for_deployment(
        &self,
        deployment_id: &str,
    ) -> Result<Vec<Backup>, ProvisioningApiError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state.backups.get(deployment_id).cloned().unwrap_or_default())
    }

    async fn restore_backup(
        &self,
        command: &RestoreBackupCommand,
    ) -> Result<Deployment, ProvisioningApiError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.restores.push(command.clone());

        Ok(Deployment {
            id: RESTORED_DEPLOYMENT_ID.to_string(),
            name: command.name.clone(),
            provision_recipe_id: RESTORE_RECIPE_ID.to_string(),
            ..Deployment::default()
        })
    }
}

#[derive(Default)]
struct FakeDocumentStoreState {
    databases: Vec<String>,
    users: HashMap<(String, String), DatabaseUser>,
    connections: Vec<AdminConnection>,
    closes: usize,
    connect_error: Option<CredentialsDomainError>,
    upsert_error: Option<CredentialsDomainError>,
}

/// In-memory document store; every session shares the same server state.
pub struct FakeDocumentStoreConnector {
    state: Arc<Mutex<FakeDocumentStoreState>>,
}

impl FakeDocumentStoreConnector {
    pub fn with_databases(databases: &[&str]) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeDocumentStoreState {
                databases: databases.iter().map(|name| name.to_string()).collect(),
                ..FakeDocumentStoreState::default()
            })),
        }
    }

    pub fn add_database(&self, name: &str) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .databases
            .push(name.to_string());
    }

    pub fn fail_connect(&self, error: CredentialsDomainError) {
        self.state.lock().expect("mutex poisoned").connect_error = Some(error);
    }

    pub fn fail_upsert(&self, error: CredentialsDomainError) {
        self.state.lock().expect("mutex poisoned").upsert_error = Some(error);
    }

    pub fn user(&self, database: &str, username: &str) -> Option<DatabaseUser> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .users
            .get(&(database.to_string(), username.to_string()))
            .cloned()
    }

    pub fn user_count(&self) -> usize {
        self.state.lock().expect("mutex poisoned").users.len()
    }

    pub fn connections(&self) -> Vec<AdminConnection> {
        self.state.lock().expect("mutex poisoned").connections.clone()
    }

    /// (opened, closed)
    pub fn session_stats(&self) -> (usize, usize) {
        let state = self.state.lock().expect("mutex poisoned");
        (state.connections.len(), state.closes)
    }
}

#[async_trait]
impl DocumentStoreConnector for FakeDocumentStoreConnector {
    async fn connect(
        &self,
        connection: &AdminConnection,
    ) -> Result<Box<dyn DocumentStoreSession>, CredentialsDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        if let Some(error) = state.connect_error.clone() {
            return Err(error);
        }
        state.connections.push(connection.clone());

        Ok(Box::new(FakeDocumentStoreSession {
            state: self.state.clone(),
        }))
    }
}

struct FakeDocumentStoreSession {
    state: Arc<Mutex<FakeDocumentStoreState>>,
}

#[async_trait]
impl DocumentStoreSession for FakeDocumentStoreSession {
    async fn list_database_names(&self) -> Result<Vec<String>, CredentialsDomainError> {
        Ok(self.state.lock().expect("mutex poisoned").databases.clone())
    }

    async fn upsert_user(
        &self,
        database: &str,
        user: &DatabaseUser,
    ) -> Result<(), CredentialsDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        if let Some(error) = state.upsert_error.clone() {
            return Err(error);
        }

        state
            .users
            .insert((database.to_string(), user.username.clone()), user.clone());
        if !state.databases.iter().any(|name| name == database) {
            state.databases.push(database.to_string());
        }
        Ok(())
    }

    async fn remove_user(
        &self,
        database: &str,
        username: &str,
    ) -> Result<(), CredentialsDomainError> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .users
            .remove(&(database.to_string(), username.to_string()));
        Ok(())
    }

    async fn close(&self) {
        self.state.lock().expect("mutex poisoned").closes += 1;
    }
}
