use crate::broker::domain::model::enums::broker_domain_error::BrokerDomainError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstanceName(String);

impl InstanceName {
    pub fn new(db_prefix: &str, instance_id: &str) -> Result<Self, BrokerDomainError> {
        let prefix = db_prefix.trim();
        if prefix.is_empty() {
            return Err(BrokerDomainError::InvalidInstanceName(
                "db prefix can't be empty".to_string(),
            ));
        }
        if instance_id.is_empty() {
            return Err(BrokerDomainError::InvalidInstanceName(
                "instance id can't be empty".to_string(),
            ));
        }

        Ok(Self(format!("{prefix}-{instance_id}")))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
