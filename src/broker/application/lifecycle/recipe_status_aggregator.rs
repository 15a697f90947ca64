use crate::{
    broker::domain::model::{
        entities::last_operation::LastOperation,
        enums::{broker_domain_error::BrokerDomainError, last_operation_state::LastOperationState},
    },
    provisioning_api::interfaces::acl::provisioning_client::ProvisioningClient,
};

/// Whitelist recipes are only polled once the primary recipe has succeeded.
pub async fn aggregate(
    client: &dyn ProvisioningClient,
    recipe_id: &str,
    whitelist_recipe_ids: &[String],
) -> Result<LastOperation, BrokerDomainError> {
    let primary = client.get_recipe(recipe_id).await?;
    let primary_state = LastOperationState::from_recipe_status(&primary.status);
    if primary_state != LastOperationState::Succeeded {
        return Ok(LastOperation::new(primary_state, primary.status_detail));
    }

    for whitelist_recipe_id in whitelist_recipe_ids {
        let recipe = client.get_recipe(whitelist_recipe_id).await?;
        let state = LastOperationState::from_recipe_status(&recipe.status);
        if state != LastOperationState::Succeeded {
            return Ok(LastOperation::new(state, recipe.status_detail));
        }
    }

    Ok(LastOperation::new(primary_state, primary.status_detail))
}
