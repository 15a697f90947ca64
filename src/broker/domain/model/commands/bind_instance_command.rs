#[derive(Clone, Debug)]
pub struct BindInstanceCommand {
    instance_id: String,
    binding_id: String,
    service_id: String,
}

impl BindInstanceCommand {
    pub fn new(instance_id: String, binding_id: String, service_id: String) -> Self {
        Self {
            instance_id,
            binding_id,
            service_id,
        }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn binding_id(&self) -> &str {
        &self.binding_id
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }
}
