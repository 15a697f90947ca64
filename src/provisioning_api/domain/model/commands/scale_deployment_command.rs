use serde::Serialize;

#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ScaleDeploymentCommand {
    #[serde(skip)]
    pub deployment_id: String,
    pub units: u32,
}
