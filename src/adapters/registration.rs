//! Registration request adapter
//!
//! Converts a desired ClientResource into the Operations Center registration body.

use crate::error::{Error, Result};
use crate::remote::RegisterClientRequest;
use crate::resource::ClientResource;

/// Build the registration request for a desired client.
///
/// Unset optional attributes are omitted so the server applies its own
/// defaults. The enumerated attributes always carry the desired value.
pub fn build_register_request(desired: &ClientResource) -> Result<RegisterClientRequest> {
    let password = desired
        .password
        .clone()
        .ok_or_else(|| Error::validation("password is required to register a client"))?;
    let domain = desired
        .domain
        .clone()
        .ok_or_else(|| Error::validation("domain is required to register a client"))?;

    Ok(RegisterClientRequest {
        name: desired.name.clone(),
        authentication: desired.authentication.as_str().to_string(),
        password,
        domain,
        contact: non_empty(&desired.contact),
        email: non_empty(&desired.email),
        schedule: non_empty(&desired.schedule),
        option_set: non_empty(&desired.option_set),
        deduplication: Some(desired.deduplication.as_str().to_string()),
        ssl_required: Some(desired.ssl_required.as_str().to_string()),
        session_initiation: Some(desired.session_initiation.as_str().to_string()),
    })
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{SessionInitiation, SslRequired};
    use secrecy::{ExposeSecret, SecretString};

    fn desired() -> ClientResource {
        ClientResource {
            password: Some(SecretString::new("secret".into())),
            domain: Some("STANDARD".to_string()),
            ..ClientResource::new("srv1", "node1")
        }
    }

    #[test]
    fn test_minimal_request_omits_optional_fields() {
        let request = build_register_request(&desired()).unwrap();

        assert_eq!(request.name, "node1");
        assert_eq!(request.authentication, "Local");
        assert_eq!(request.password.expose_secret(), "secret");
        assert_eq!(request.domain, "STANDARD");
        assert_eq!(request.contact, None);
        assert_eq!(request.schedule, None);
        assert_eq!(request.option_set, None);
        assert_eq!(request.deduplication.as_deref(), Some("ClientOrServer"));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["password"], "secret");
        assert!(json.get("schedule").is_none());
        assert!(json.get("optionSet").is_none());
    }

    #[test]
    fn test_request_debug_hides_password() {
        let request = build_register_request(&desired()).unwrap();

        let dbg = format!("{:?}", request);
        assert!(!dbg.contains("secret"));
        assert!(dbg.contains("node1"));
    }

    #[test]
    fn test_session_initiation_has_its_own_field() {
        let mut client = desired();
        client.ssl_required = SslRequired::Yes;
        client.session_initiation = SessionInitiation::ServerOnly;

        let request = build_register_request(&client).unwrap();

        assert_eq!(request.ssl_required.as_deref(), Some("YES"));
        assert_eq!(request.session_initiation.as_deref(), Some("ServerOnly"));
    }

    #[test]
    fn test_empty_strings_are_treated_as_unset() {
        let mut client = desired();
        client.schedule = Some(String::new());
        client.contact = Some("backup team".to_string());

        let request = build_register_request(&client).unwrap();

        assert_eq!(request.schedule, None);
        assert_eq!(request.contact.as_deref(), Some("backup team"));
    }

    #[test]
    fn test_missing_password_is_rejected() {
        let mut client = desired();
        client.password = None;

        let err = build_register_request(&client).unwrap_err();
        assert!(err.to_string().contains("password"));
    }
}
