//! Read-only aggregate view of a backup client

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Authentication, Deduplication, SessionInitiation, SslRequired};
use crate::remote::{ClientSchedule, Filespace};

/// Everything the Operations Center knows about one client
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientQueryResult {
    pub name: String,
    pub server_name: String,
    pub platform: String,
    pub domain: String,
    pub locked: bool,
    pub version: i64,
    pub vm_owner: String,
    pub guid: String,
    pub link: String,
    #[serde(rename = "type")]
    pub client_type: i64,
    pub vm_type: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    pub deduplication: Deduplication,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub authentication: Authentication,
    pub session_initiation: SessionInitiation,
    pub decommissioned: bool,
    pub ssl_required: SslRequired,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_set: Option<String>,
    pub split_large_objects: bool,

    pub at_risk: bool,

    /// Schedules in the order the server listed them
    pub schedules: Vec<ScheduleView>,

    /// Filespaces, absent when the lookup skipped them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filespaces: Option<Vec<FilespaceView>>,
}

/// Schedule association of a client
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView {
    pub start_time: String,
    pub server_name: String,
    pub schedule_name: String,
    pub run_time: i64,
    pub domain_name: String,
}

impl From<ClientSchedule> for ScheduleView {
    fn from(schedule: ClientSchedule) -> Self {
        Self {
            start_time: schedule.start_time,
            server_name: schedule.server_name,
            schedule_name: schedule.schedule_name,
            run_time: schedule.run_time,
            domain_name: schedule.domain_name,
        }
    }
}

/// Filespace of a client
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilespaceView {
    pub logical_mb: f64,
    pub copy_pool: i64,
    pub link: String,
    pub num_files: i64,
    pub id: i64,
    #[serde(rename = "type")]
    pub fs_type: String,
    pub name: String,
}

impl From<Filespace> for FilespaceView {
    fn from(fs: Filespace) -> Self {
        Self {
            logical_mb: fs.logical_mb,
            copy_pool: fs.copy_pool,
            link: fs.link,
            num_files: fs.num_files,
            id: fs.id,
            fs_type: fs.fs_type,
            name: fs.name,
        }
    }
}
