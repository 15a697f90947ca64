use tracing::info;

use crate::{
    broker::domain::model::{
        entities::broker_settings::BrokerSettings, enums::broker_domain_error::BrokerDomainError,
    },
    config::app_config::AppConfig,
    provisioning_api::interfaces::acl::provisioning_client::ProvisioningClient,
};

pub async fn resolve_broker_settings(
    client: &dyn ProvisioningClient,
    config: &AppConfig,
) -> Result<BrokerSettings, BrokerDomainError> {
    let account = client.get_account().await.map_err(|e| {
        BrokerDomainError::ProviderError(format!("could not get account ID: {e}"))
    })?;

    let cluster_id = match config.cluster_name.as_deref() {
        Some(cluster_name) => {
            let cluster = client.get_cluster_by_name(cluster_name).await.map_err(|e| {
                BrokerDomainError::ProviderError(format!("could not get cluster ID: {e}"))
            })?;
            info!(cluster_name, cluster_id = %cluster.id, "broker is cluster-scoped");
            Some(cluster.id)
        }
        None => None,
    };

    Ok(BrokerSettings {
        db_prefix: config.db_prefix.clone(),
        ip_whitelist: config.ip_whitelist.clone(),
        account_id: account.id,
        cluster_id,
    })
}
