//! Backup client resource

use schemars::JsonSchema;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::adapters::identifier;
use crate::error::{Error, Result};

/// Registered backup client, desired and observed state.
///
/// `server_name` and `name` form the identity. Attributes documented as
/// creation-only require the client to be recreated when they change.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientResource {
    /// Composite identifier `serverName/name`, set once the client exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Spectrum Protect server the client is registered on
    pub server_name: String,

    /// Client node name
    pub name: String,

    /// Authentication method (creation-only)
    #[serde(default)]
    pub authentication: Authentication,

    /// Node password, write-only
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "crate::secret_string::deserialize_optional"
    )]
    #[schemars(with = "Option<String>")]
    pub password: Option<SecretString>,

    /// Policy domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Contact (creation-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,

    /// Contact email (creation-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Backup schedule within the policy domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// Client option set (creation-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_set: Option<String>,

    /// Where deduplication runs (creation-only)
    #[serde(default)]
    pub deduplication: Deduplication,

    /// SSL requirement (creation-only)
    #[serde(default)]
    pub ssl_required: SslRequired,

    /// Who may initiate sessions (creation-only)
    #[serde(default)]
    pub session_initiation: SessionInitiation,

    /// Whether the node is locked
    #[serde(default)]
    pub locked: bool,

    /// Observed: REST link of the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Observed: decommission state as reported by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decommissioned: Option<String>,

    /// Observed: whether large objects are split
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_large_objects: Option<bool>,
}

impl ClientResource {
    /// Create a resource with the given identity and default attributes
    pub fn new(server_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Composite identifier derived from the identity attributes
    pub fn identifier(&self) -> Result<String> {
        identifier::encode(&self.server_name, &self.name)
    }

    /// Copy the attributes the server never reports back from `desired`.
    pub fn carry_unobserved(&mut self, desired: &ClientResource) {
        self.password = desired.password.clone();
        self.domain = desired.domain.clone();
        self.schedule = desired.schedule.clone();
    }

    /// Name of the first creation-only or identity attribute that differs.
    ///
    /// Free-form attributes compare empty and unset as equal, the server
    /// reports both the same way.
    pub fn changed_creation_only_attribute(&self, other: &ClientResource) -> Option<&'static str> {
        if self.server_name != other.server_name {
            return Some("server_name");
        }
        if self.name != other.name {
            return Some("name");
        }
        if self.authentication != other.authentication {
            return Some("authentication");
        }
        if set_value(&self.contact) != set_value(&other.contact) {
            return Some("contact");
        }
        if set_value(&self.email) != set_value(&other.email) {
            return Some("email");
        }
        if set_value(&self.option_set) != set_value(&other.option_set) {
            return Some("option_set");
        }
        if self.deduplication != other.deduplication {
            return Some("deduplication");
        }
        if self.ssl_required != other.ssl_required {
            return Some("ssl_required");
        }
        if self.session_initiation != other.session_initiation {
            return Some("session_initiation");
        }
        None
    }
}

fn set_value(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Authentication method
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum Authentication {
    #[default]
    Local,
    #[serde(rename = "LDAP")]
    Ldap,
}

impl Authentication {
    const VARIANTS: &'static [(&'static str, Self)] =
        &[("Local", Self::Local), ("LDAP", Self::Ldap)];

    pub fn as_str(&self) -> &'static str {
        variant_name(Self::VARIANTS, *self)
    }

    /// Parse the server's spelling of the value
    pub fn from_remote(value: &str) -> Result<Self> {
        parse_variant("authentication", value, Self::VARIANTS)
    }
}

/// Where deduplication is performed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum Deduplication {
    #[default]
    ClientOrServer,
    ServerOnly,
}

impl Deduplication {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("ClientOrServer", Self::ClientOrServer),
        ("ServerOnly", Self::ServerOnly),
    ];

    pub fn as_str(&self) -> &'static str {
        variant_name(Self::VARIANTS, *self)
    }

    /// Parse the server's spelling of the value
    pub fn from_remote(value: &str) -> Result<Self> {
        parse_variant("deduplication", value, Self::VARIANTS)
    }
}

/// SSL requirement for client sessions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum SslRequired {
    #[default]
    Default,
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
}

impl SslRequired {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("Default", Self::Default),
        ("YES", Self::Yes),
        ("NO", Self::No),
    ];

    pub fn as_str(&self) -> &'static str {
        variant_name(Self::VARIANTS, *self)
    }

    /// Parse the server's spelling of the value
    pub fn from_remote(value: &str) -> Result<Self> {
        parse_variant("ssl_required", value, Self::VARIANTS)
    }
}

/// Which side may initiate backup sessions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum SessionInitiation {
    #[default]
    ClientOrServer,
    ServerOnly,
}

impl SessionInitiation {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("ClientOrServer", Self::ClientOrServer),
        ("ServerOnly", Self::ServerOnly),
    ];

    pub fn as_str(&self) -> &'static str {
        variant_name(Self::VARIANTS, *self)
    }

    /// Parse the server's spelling of the value
    pub fn from_remote(value: &str) -> Result<Self> {
        parse_variant("session_initiation", value, Self::VARIANTS)
    }
}

fn variant_name<T: Copy + PartialEq>(variants: &[(&'static str, T)], value: T) -> &'static str {
    variants
        .iter()
        .find(|(_, v)| *v == value)
        .map(|(name, _)| *name)
        .unwrap_or_default()
}

// The server is inconsistent about case, e.g. "Serveronly".
fn parse_variant<T: Copy>(
    attribute: &'static str,
    value: &str,
    variants: &[(&'static str, T)],
) -> Result<T> {
    variants
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
        .map(|(_, v)| *v)
        .ok_or_else(|| Error::UnexpectedValue {
            attribute,
            value: value.to_string(),
        })
}
