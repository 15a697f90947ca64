use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::{Client, Method, RequestBuilder, StatusCode, header::ACCEPT};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::provisioning_api::{
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
        enums::provisioning_api_error::{ProvisioningApiError, squash_errors},
    },
    interfaces::acl::provisioning_client::ProvisioningClient,
};

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Deserialize)]
struct Embedded<T> {
    #[serde(rename = "_embedded")]
    embedded: T,
}

#[derive(Deserialize)]
struct AccountsPage {
    #[serde(default)]
    accounts: Vec<Account>,
}

#[derive(Deserialize)]
struct ClustersPage {
    #[serde(default)]
    clusters: Vec<Cluster>,
}

#[derive(Deserialize)]
struct BackupsPage {
    #[serde(default)]
    backups: Vec<Backup>,
}

#[derive(Serialize)]
struct DeploymentEnvelope<'a, T: Serialize> {
    deployment: &'a T,
}

#[derive(Serialize)]
struct WhitelistEnvelope<'a> {
    whitelist: &'a CreateWhitelistEntryCommand,
}

pub struct HttpProvisioningClientImpl {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpProvisioningClientImpl {
    pub fn new(api_url: &str, token: &str, timeout: Duration) -> Result<Self, ProvisioningApiError> {
        if token.trim().is_empty() {
            return Err(ProvisioningApiError::Transport(
                "API token should not be empty".to_string(),
            ));
        }
        if api_url.trim().is_empty() {
            return Err(ProvisioningApiError::Transport(
                "API URL should not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProvisioningApiError::Transport(e.to_string()))?;

        let mut base_url = api_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            client,
            base_url,
            token: token.to_string(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
    }

    async fn fetch_payload(&self, request: RequestBuilder) -> Result<String, ProvisioningApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ProvisioningApiError::Transport(e.to_string()))?;

        let status = response.status();
        let payload = response
            .text()
            .await
            .map_err(|e| ProvisioningApiError::Transport(e.to_string()))?;

        if status == StatusCode::NOT_FOUND {
            return Err(ProvisioningApiError::NotFound(squash_errors(
                &parse_error_messages(&payload),
            )));
        }
        if !status.is_success() {
            return Err(ProvisioningApiError::Remote(parse_error_messages(&payload)));
        }

        Ok(payload)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ProvisioningApiError> {
        let payload = self.fetch_payload(request).await?;
        serde_json::from_str(&payload)
            .map_err(|e| ProvisioningApiError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl ProvisioningClient for HttpProvisioningClientImpl {
    async fn get_account(&self) -> Result<Account, ProvisioningApiError> {
        let page: Embedded<AccountsPage> = self.execute(self.request(Method::GET, "accounts")).await?;

        page.embedded.accounts.into_iter().next().ok_or_else(|| {
            ProvisioningApiError::MalformedResponse("no account returned".to_string())
        })
    }

    async fn get_cluster_by_name(&self, name: &str) -> Result<Cluster, ProvisioningApiError> {
        let page: Embedded<ClustersPage> = self.execute(self.request(Method::GET, "clusters")).await?;

        page.embedded
            .clusters
            .into_iter()
            .find(|cluster| cluster.name == name)
            .ok_or_else(|| ProvisioningApiError::NotFound(format!("cluster '{name}' not found")))
    }

    async fn create_deployment(
        &self,
        command: &CreateDeploymentCommand,
    ) -> Result<Deployment, ProvisioningApiError> {
        let request = self
            .request(Method::POST, "deployments")
            .json(&DeploymentEnvelope {
                deployment: command,
            });
        self.execute(request).await
    }

    async fn deprovision_deployment(
        &self,
        deployment_id: &str,
    ) -> Result<Recipe, ProvisioningApiError> {
        let path = format!("deployments/{}", encode_segment(deployment_id));
        self.execute(self.request(Method::DELETE, &path)).await
    }

    async fn get_deployment_by_name(&self, name: &str) -> Result<Deployment, ProvisioningApiError> {
        let path = format!("deployments/name/{}", encode_segment(name));
        self.execute(self.request(Method::GET, &path)).await
    }

    async fn patch_deployment(
        &self,
        command: &PatchDeploymentCommand,
    ) -> Result<Deployment, ProvisioningApiError> {
        let path = format!("deployments/{}", encode_segment(&command.deployment_id));
        let request = self
            .request(Method::PATCH, &path)
            .json(&DeploymentEnvelope {
                deployment: command,
            });
        self.execute(request).await
    }

    async fn set_scalings(
        &self,
        command: &ScaleDeploymentCommand,
    ) -> Result<Recipe, ProvisioningApiError> {
        let path = format!(
            "deployments/{}/scalings",
            encode_segment(&command.deployment_id)
        );
        let request = self
            .request(Method::POST, &path)
            .json(&DeploymentEnvelope {
                deployment: command,
            });
        self.execute(request).await
    }

    async fn get_recipe(&self, recipe_id: &str) -> Result<Recipe, ProvisioningApiError> {
        let path = format!("recipes/{}", encode_segment(recipe_id));
        self.execute(self.request(Method::GET, &path)).await
    }

    async fn create_deployment_whitelist(
        &self,
        deployment_id: &str,
        command: &CreateWhitelistEntryCommand,
    ) -> Result<Option<Recipe>, ProvisioningApiError> {
        let path = format!("deployments/{}/whitelist", encode_segment(deployment_id));
        let request = self
            .request(Method::POST, &path)
            .json(&WhitelistEnvelope { whitelist: command });

        let payload = self.fetch_payload(request).await?;
        if payload.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str::<Option<Recipe>>(&payload)
            .map_err(|e| ProvisioningApiError::MalformedResponse(e.to_string()))
    }

    async fn get_backups_for_deployment(
        &self,
        deployment_id: &str,
    ) -> Result<Vec<Backup>, ProvisioningApiError> {
        let path = format!("deployments/{}/backups", encode_segment(deployment_id));
        let page: Embedded<BackupsPage> = self.execute(self.request(Method::GET, &path)).await?;
        Ok(page.embedded.backups)
    }

    async fn restore_backup(
        &self,
        command: &RestoreBackupCommand,
    ) -> Result<Deployment, ProvisioningApiError> {
        let path = format!(
            "deployments/{}/backups/{}/restore",
            encode_segment(&command.deployment_id),
            encode_segment(&command.backup_id)
        );
        let request = self
            .request(Method::POST, &path)
            .json(&DeploymentEnvelope {
                deployment: command,
            });
        self.execute(request).await
    }
}

fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// `errors` is a string, a list, or a map of field to messages; anything else falls back to the raw body.
pub fn parse_error_messages(payload: &str) -> Vec<String> {
    let trimmed = payload.trim();
    let fallback = || {
        if trimmed.is_empty() {
            vec!["empty error response from provisioning API".to_string()]
        } else {
            vec![trimmed.to_string()]
        }
    };

    let Ok(value) = serde_json::from_str::<Value>(trimmed) else {
        return fallback();
    };

    let messages: Vec<String> = match value.get("errors") {
        Some(Value::String(message)) => vec![message.clone()],
        Some(Value::Array(items)) => items.iter().map(message_text).collect(),
        Some(Value::Object(fields)) => fields
            .iter()
            .flat_map(|(field, detail)| match detail {
                Value::Array(items) => items
                    .iter()
                    .map(|item| format!("{field}: {}", message_text(item)))
                    .collect::<Vec<_>>(),
                other => vec![format!("{field}: {}", message_text(other))],
            })
            .collect(),
        _ => Vec::new(),
    };

    if messages.is_empty() {
        fallback()
    } else {
        messages
    }
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    }
}
