#[derive(Clone, Debug)]
pub struct LastOperationQuery {
    instance_id: String,
    operation: String,
}

impl LastOperationQuery {
    pub fn new(instance_id: String, operation: String) -> Self {
        Self {
            instance_id,
            operation,
        }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }
}
