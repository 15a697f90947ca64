#[derive(Clone, Debug)]
pub struct UnbindInstanceCommand {
    instance_id: String,
    binding_id: String,
}

impl UnbindInstanceCommand {
    pub fn new(instance_id: String, binding_id: String) -> Self {
        Self {
            instance_id,
            binding_id,
        }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn binding_id(&self) -> &str {
        &self.binding_id
    }
}
