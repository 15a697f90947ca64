use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{error, warn};

use crate::{
    broker::domain::model::value_objects::instance_name::InstanceName,
    provisioning_api::interfaces::acl::provisioning_client::ProvisioningClient,
};

/// Dropped while armed, it spawns the deprovision on the current runtime.
pub struct PendingRollback {
    client: Arc<dyn ProvisioningClient>,
    deployment_id: String,
    instance_name: String,
    armed: bool,
}

impl PendingRollback {
    pub fn arm(
        client: Arc<dyn ProvisioningClient>,
        deployment_id: &str,
        instance_name: &InstanceName,
    ) -> Self {
        Self {
            client,
            deployment_id: deployment_id.to_string(),
            instance_name: instance_name.value().to_string(),
            armed: true,
        }
    }

    pub fn commit(mut self) {
        self.armed = false;
    }

    pub async fn run(mut self) {
        self.armed = false;
        deprovision(self.client.as_ref(), &self.deployment_id, &self.instance_name).await;
    }
}

impl Drop for PendingRollback {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let client = self.client.clone();
        let deployment_id = self.deployment_id.clone();
        let instance_name = self.instance_name.clone();

        match Handle::try_current() {
            Ok(handle) => {
                warn!(
                    deployment_id = %deployment_id,
                    instance_name = %instance_name,
                    "provision abandoned before completion"
                );
                handle.spawn(async move {
                    deprovision(client.as_ref(), &deployment_id, &instance_name).await;
                });
            }
            Err(_) => error!(
                deployment_id = %deployment_id,
                instance_name = %instance_name,
                "no runtime left to deprovision abandoned deployment"
            ),
        }
    }
}

async fn deprovision(client: &dyn ProvisioningClient, deployment_id: &str, instance_name: &str) {
    match client.deprovision_deployment(deployment_id).await {
        Ok(recipe) => warn!(
            deployment_id,
            instance_name,
            recipe_id = %recipe.id,
            "deprovisioning partially provisioned deployment"
        ),
        Err(error) => error!(
            deployment_id,
            instance_name,
            error = %error,
            "failed to deprovision partially provisioned deployment"
        ),
    }
}
