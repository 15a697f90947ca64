use compose_service_broker::provisioning_api::{
    application::acl::http_provisioning_client_impl::parse_error_messages,
    domain::model::enums::provisioning_api_error::{ProvisioningApiError, squash_errors},
};

#[test]
fn parse_error_messages_reads_string_errors() {
    assert_eq!(
        parse_error_messages(r#"{"errors":"Deployment not found"}"#),
        vec!["Deployment not found"]
    );
}

#[test]
fn parse_error_messages_reads_error_lists() {
    assert_eq!(
        parse_error_messages(r#"{"errors":["name is taken","units must be positive"]}"#),
        vec!["name is taken", "units must be positive"]
    );
}

#[test]
fn parse_error_messages_prefixes_field_errors() {
    assert_eq!(
        parse_error_messages(r#"{"errors":{"name":["is taken","is too long"],"units":"is invalid"}}"#),
        vec!["name: is taken", "name: is too long", "units: is invalid"]
    );
}

#[test]
fn parse_error_messages_falls_back_to_raw_body() {
    assert_eq!(
        parse_error_messages("  502 Bad Gateway \n"),
        vec!["502 Bad Gateway"]
    );
    assert_eq!(
        parse_error_messages(r#"{"message":"nope"}"#),
        vec![r#"{"message":"nope"}"#]
    );
    assert_eq!(
        parse_error_messages(""),
        vec!["empty error response from provisioning API"]
    );
}

#[test]
fn remote_errors_are_squashed_into_one_message() {
    let messages = vec!["first".to_string(), "second".to_string()];

    assert_eq!(squash_errors(&messages), "first; second");
    assert_eq!(
        ProvisioningApiError::Remote(messages).to_string(),
        "first; second"
    );
}
