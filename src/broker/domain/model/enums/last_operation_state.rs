use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum LastOperationState {
    #[serde(rename = "succeeded")]
    Succeeded,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "failed")]
    Failed,
}

impl LastOperationState {
    /// Unknown recipe statuses are treated as failures.
    pub fn from_recipe_status(status: &str) -> Self {
        match status {
            "complete" => Self::Succeeded,
            "running" | "waiting" => Self::InProgress,
            _ => Self::Failed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::InProgress => "in progress",
            Self::Failed => "failed",
        }
    }
}
