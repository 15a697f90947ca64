use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Backup {
    pub id: String,
    #[serde(default)]
    pub deployment_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub backup_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub is_downloadable: bool,
    #[serde(default)]
    pub is_restorable: bool,
    pub created_at: DateTime<Utc>,
}
