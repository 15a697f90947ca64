use serde::Serialize;

/// The restore endpoint does not take a billing code; callers patch it on afterwards.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct RestoreBackupCommand {
    #[serde(skip)]
    pub deployment_id: String,
    #[serde(skip)]
    pub backup_id: String,
    pub name: String,
    pub datacenter: String,
    pub ssl: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
}
