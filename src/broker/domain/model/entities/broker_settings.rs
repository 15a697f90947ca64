#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrokerSettings {
    pub db_prefix: String,
    pub ip_whitelist: Vec<String>,
    pub account_id: String,
    pub cluster_id: Option<String>,
}
