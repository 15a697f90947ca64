#[derive(Clone, Debug)]
pub struct UpdateInstanceCommand {
    instance_id: String,
    service_id: String,
    plan_id: String,
    previous_plan_id: String,
    accepts_incomplete: bool,
}

impl UpdateInstanceCommand {
    pub fn new(
        instance_id: String,
        service_id: String,
        plan_id: String,
        previous_plan_id: String,
        accepts_incomplete: bool,
    ) -> Self {
        Self {
            instance_id,
            service_id,
            plan_id,
            previous_plan_id,
            accepts_incomplete,
        }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn plan_id(&self) -> &str {
        &self.plan_id
    }

    pub fn previous_plan_id(&self) -> &str {
        &self.previous_plan_id
    }

    pub fn accepts_incomplete(&self) -> bool {
        self.accepts_incomplete
    }

    pub fn changes_plan(&self) -> bool {
        self.plan_id != self.previous_plan_id
    }
}
