//! Payloads exchanged with the Operations Center

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Entry of the client listing
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupClient {
    pub name: String,
    pub server: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub domain: String,
    /// Numeric lock flag, non-zero when locked
    #[serde(default)]
    pub locked: i64,
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub vm_owner: String,
    #[serde(default)]
    pub guid: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, rename = "type")]
    pub client_type: i64,
    #[serde(default)]
    pub vm_type: i64,
}

/// Client details. Boolean-like fields use the yes/no string encoding.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetails {
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub deduplication: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub authentication: String,
    #[serde(default)]
    pub session_initiation: String,
    pub locked: String,
    #[serde(default)]
    pub decommissioned: String,
    #[serde(default)]
    pub ssl_required: String,
    #[serde(default)]
    pub option_set: String,
    pub split_large_objects: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// At-risk status of a client
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtRisk {
    pub at_risk: String,
}

/// Schedule association of a client
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSchedule {
    pub start_time: String,
    pub server_name: String,
    pub schedule_name: String,
    pub run_time: i64,
    pub domain_name: String,
}

/// Filespace of a client
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filespace {
    #[serde(rename = "fsLogicalMB")]
    pub logical_mb: f64,
    #[serde(rename = "fsCopyPool")]
    pub copy_pool: i64,
    pub link: String,
    #[serde(rename = "fsNumFiles")]
    pub num_files: i64,
    pub id: i64,
    #[serde(rename = "fsType")]
    pub fs_type: String,
    pub name: String,
}

/// Body of a client registration
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterClientRequest {
    pub name: String,
    pub authentication: String,
    #[serde(serialize_with = "crate::secret_string::serialize")]
    pub password: SecretString,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deduplication: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_required: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_initiation: Option<String>,
}
