use serde::Serialize;

#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct PatchDeploymentCommand {
    #[serde(skip)]
    pub deployment_id: String,
    pub customer_billing_code: String,
}
