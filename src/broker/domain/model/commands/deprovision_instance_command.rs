#[derive(Clone, Debug)]
pub struct DeprovisionInstanceCommand {
    instance_id: String,
    accepts_incomplete: bool,
}

impl DeprovisionInstanceCommand {
    pub fn new(instance_id: String, accepts_incomplete: bool) -> Self {
        Self {
            instance_id,
            accepts_incomplete,
        }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn accepts_incomplete(&self) -> bool {
        self.accepts_incomplete
    }
}
