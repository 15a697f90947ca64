use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DocumentStoreCredentials {
    pub hosts: Vec<String>,
    pub name: String,
    pub username: String,
    pub password: String,
    pub uri: String,
    pub ca_certificate_base64: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SearchCredentials {
    pub host: String,
    pub hosts: Vec<String>,
    pub port: String,
    pub name: String,
    pub username: String,
    pub password: String,
    pub uri: String,
    pub uris: Vec<String>,
    pub ca_certificate_base64: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct KeyValueCredentials {
    pub host: String,
    pub port: String,
    pub username: String,
    pub password: String,
    pub uri: String,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BindingCredentials {
    DocumentStore(DocumentStoreCredentials),
    Search(SearchCredentials),
    KeyValue(KeyValueCredentials),
}
