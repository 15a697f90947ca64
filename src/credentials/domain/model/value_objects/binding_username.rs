#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BindingUsername(String);

impl BindingUsername {
    pub fn for_binding(binding_id: &str) -> Self {
        Self(format!("user_{binding_id}"))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
