use base64::{Engine, engine::general_purpose::STANDARD};
use compose_service_broker::provisioning_api::domain::model::entities::deployment::{
    ConnectionStrings, Deployment,
};

pub const CA_CERTIFICATE_PEM: &str =
    "-----BEGIN CERTIFICATE-----\nMIIBcredentials\n-----END CERTIFICATE-----\n";

pub fn deployment_with(deployment_type: &str, direct: &[&str]) -> Deployment {
    Deployment {
        id: "deployment-1".to_string(),
        name: "compose-broker-instance-1".to_string(),
        deployment_type: deployment_type.to_string(),
        ca_certificate_base64: STANDARD.encode(CA_CERTIFICATE_PEM),
        connection: ConnectionStrings {
            direct: direct.iter().map(|endpoint| endpoint.to_string()).collect(),
            ..ConnectionStrings::default()
        },
        ..Deployment::default()
    }
}
