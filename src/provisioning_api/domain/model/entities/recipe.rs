use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Recipe {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub status_detail: String,
    #[serde(default)]
    pub deployment_id: String,
    #[serde(default)]
    pub name: String,
}
