use serde_json::Value;

use crate::broker::domain::model::enums::broker_domain_error::BrokerDomainError;

pub const RESTORE_FROM_LATEST_SNAPSHOT_OF: &str = "restoreFromLatestSnapshotOf";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProvisionParameters {
    restore_from_latest_snapshot_of: Option<String>,
}

impl ProvisionParameters {
    pub fn from_raw(raw: Option<&Value>) -> Result<Self, BrokerDomainError> {
        let fields = match raw {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Object(fields)) => fields,
            Some(_) => {
                return Err(BrokerDomainError::InvalidParameters(
                    "parameters must be a JSON object".to_string(),
                ));
            }
        };

        let restore_from_latest_snapshot_of = match fields.get(RESTORE_FROM_LATEST_SNAPSHOT_OF) {
            None | Some(Value::Null) => None,
            Some(Value::String(instance_id)) => Some(instance_id.clone()),
            Some(_) => {
                return Err(BrokerDomainError::InvalidParameters(format!(
                    "{RESTORE_FROM_LATEST_SNAPSHOT_OF} must be a string"
                )));
            }
        };

        Ok(Self {
            restore_from_latest_snapshot_of,
        })
    }

    pub fn restore_from_latest_snapshot_of(&self) -> Option<&str> {
        self.restore_from_latest_snapshot_of.as_deref()
    }
}
