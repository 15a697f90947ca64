use crate::broker::domain::model::enums::last_operation_state::LastOperationState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastOperation {
    pub state: LastOperationState,
    pub description: String,
}

impl LastOperation {
    pub fn new(state: LastOperationState, description: impl Into<String>) -> Self {
        Self {
            state,
            description: description.into(),
        }
    }
}
