use serde_json::Value;

use crate::broker::domain::model::{
    entities::provision_parameters::ProvisionParameters,
    enums::broker_domain_error::BrokerDomainError,
};

#[derive(Clone, Debug)]
pub struct ProvisionInstanceCommand {
    instance_id: String,
    service_id: String,
    plan_id: String,
    space_id: String,
    accepts_incomplete: bool,
    parameters: ProvisionParameters,
}

impl ProvisionInstanceCommand {
    pub fn new(
        instance_id: String,
        service_id: String,
        plan_id: String,
        space_id: String,
        accepts_incomplete: bool,
        raw_parameters: Option<&Value>,
    ) -> Result<Self, BrokerDomainError> {
        Ok(Self {
            instance_id,
            service_id,
            plan_id,
            space_id,
            accepts_incomplete,
            parameters: ProvisionParameters::from_raw(raw_parameters)?,
        })
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn plan_id(&self) -> &str {
        &self.plan_id
    }

    pub fn space_id(&self) -> &str {
        &self.space_id
    }

    pub fn accepts_incomplete(&self) -> bool {
        self.accepts_incomplete
    }

    pub fn parameters(&self) -> &ProvisionParameters {
        &self.parameters
    }
}
