//! Test helpers for spoc-provider integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::Value;
use spoc_provider::remote::{
    AtRisk, BackupClient, ClientDetails, ClientSchedule, Filespace, OperationsCenter,
    RegisterClientRequest, RemoteError, RemoteResult,
};
use spoc_provider::resource::ClientResource;

/// A call received by the fake Operations Center.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListClients,
    ClientDetails { server: String, name: String },
    AtRisk { server: String, name: String },
    Schedules { server: String, domain: String, name: String },
    Filespaces { server: String, name: String },
    /// Registration body as sent on the wire
    Register { server: String, request: Value },
    Lock { server: String, name: String },
    Unlock { server: String, name: String },
    UpdatePassword { server: String, name: String, password: String },
    AssignSchedule {
        server: String,
        name: String,
        domain: String,
        schedule: Option<String>,
    },
    Decommission { server: String, name: String },
}

impl Call {
    fn label(&self) -> &'static str {
        match self {
            Call::ListClients => "list_clients",
            Call::ClientDetails { .. } => "client_details",
            Call::AtRisk { .. } => "at_risk",
            Call::Schedules { .. } => "schedules",
            Call::Filespaces { .. } => "filespaces",
            Call::Register { .. } => "register_client",
            Call::Lock { .. } => "lock",
            Call::Unlock { .. } => "unlock",
            Call::UpdatePassword { .. } => "update_password",
            Call::AssignSchedule { .. } => "assign_schedule",
            Call::Decommission { .. } => "decommission",
        }
    }
}

#[derive(Default)]
struct State {
    listing: Vec<BackupClient>,
    details: HashMap<(String, String), ClientDetails>,
    at_risk: HashMap<(String, String), String>,
    schedules: Vec<ClientSchedule>,
    filespaces: Vec<Filespace>,
    failures: HashMap<&'static str, RemoteError>,
    calls: Vec<Call>,
}

/// In-memory Operations Center that records every call it receives.
#[derive(Default)]
pub struct FakeOperationsCenter {
    state: Mutex<State>,
}

impl FakeOperationsCenter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make the server know a client's details.
    pub fn insert_details(&self, server: &str, details: ClientDetails) {
        let mut state = self.state.lock().unwrap();
        state
            .details
            .insert((server.to_string(), details.name.clone()), details);
    }

    pub fn push_listing(&self, client: BackupClient) {
        self.state.lock().unwrap().listing.push(client);
    }

    pub fn set_at_risk(&self, server: &str, name: &str, value: &str) {
        self.state
            .lock()
            .unwrap()
            .at_risk
            .insert((server.to_string(), name.to_string()), value.to_string());
    }

    pub fn push_schedule(&self, schedule: ClientSchedule) {
        self.state.lock().unwrap().schedules.push(schedule);
    }

    pub fn push_filespace(&self, filespace: Filespace) {
        self.state.lock().unwrap().filespaces.push(filespace);
    }

    /// Make every future call of the given kind fail with `error`.
    pub fn fail(&self, call: &'static str, error: RemoteError) {
        self.state.lock().unwrap().failures.insert(call, error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    /// Calls other than detail lookups, i.e. the ones that change state.
    pub fn mutating_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| {
                !matches!(
                    c,
                    Call::ClientDetails { .. }
                        | Call::ListClients
                        | Call::AtRisk { .. }
                        | Call::Schedules { .. }
                        | Call::Filespaces { .. }
                )
            })
            .collect()
    }

    pub fn details(&self, server: &str, name: &str) -> Option<ClientDetails> {
        self.state
            .lock()
            .unwrap()
            .details
            .get(&(server.to_string(), name.to_string()))
            .cloned()
    }

    fn record(&self, call: Call) -> RemoteResult<()> {
        let mut state = self.state.lock().unwrap();
        let label = call.label();
        state.calls.push(call);
        match state.failures.get(label) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn modify(&self, server: &str, name: &str, f: impl FnOnce(&mut ClientDetails)) {
        let mut state = self.state.lock().unwrap();
        if let Some(details) = state
            .details
            .get_mut(&(server.to_string(), name.to_string()))
        {
            f(details);
        }
    }
}

#[async_trait]
impl OperationsCenter for FakeOperationsCenter {
    async fn list_clients(&self) -> RemoteResult<Vec<BackupClient>> {
        self.record(Call::ListClients)?;
        Ok(self.state.lock().unwrap().listing.clone())
    }

    async fn client_details(
        &self,
        server: &str,
        name: &str,
    ) -> RemoteResult<Option<ClientDetails>> {
        self.record(Call::ClientDetails {
            server: server.to_string(),
            name: name.to_string(),
        })?;
        Ok(self.details(server, name))
    }

    async fn at_risk(&self, server: &str, name: &str) -> RemoteResult<AtRisk> {
        self.record(Call::AtRisk {
            server: server.to_string(),
            name: name.to_string(),
        })?;
        let state = self.state.lock().unwrap();
        let at_risk = state
            .at_risk
            .get(&(server.to_string(), name.to_string()))
            .cloned()
            .unwrap_or_else(|| "No".to_string());
        Ok(AtRisk { at_risk })
    }

    async fn schedules(
        &self,
        server: &str,
        domain: &str,
        name: &str,
    ) -> RemoteResult<Vec<ClientSchedule>> {
        self.record(Call::Schedules {
            server: server.to_string(),
            domain: domain.to_string(),
            name: name.to_string(),
        })?;
        Ok(self.state.lock().unwrap().schedules.clone())
    }

    async fn filespaces(&self, server: &str, name: &str) -> RemoteResult<Vec<Filespace>> {
        self.record(Call::Filespaces {
            server: server.to_string(),
            name: name.to_string(),
        })?;
        Ok(self.state.lock().unwrap().filespaces.clone())
    }

    async fn register_client(
        &self,
        server: &str,
        request: &RegisterClientRequest,
    ) -> RemoteResult<()> {
        self.record(Call::Register {
            server: server.to_string(),
            request: serde_json::to_value(request).unwrap(),
        })?;
        self.insert_details(
            server,
            ClientDetails {
                name: request.name.clone(),
                contact: request.contact.clone().unwrap_or_default(),
                deduplication: request.deduplication.clone().unwrap_or_default(),
                email: request.email.clone().unwrap_or_default(),
                authentication: request.authentication.clone(),
                session_initiation: request.session_initiation.clone().unwrap_or_default(),
                locked: "No".to_string(),
                decommissioned: "No".to_string(),
                ssl_required: request.ssl_required.clone().unwrap_or_default(),
                option_set: request.option_set.clone().unwrap_or_default(),
                split_large_objects: "Yes".to_string(),
                link: Some(format!("/clients/{}/{}", server, request.name)),
            },
        );
        Ok(())
    }

    async fn lock(&self, server: &str, name: &str) -> RemoteResult<()> {
        self.record(Call::Lock {
            server: server.to_string(),
            name: name.to_string(),
        })?;
        self.modify(server, name, |d| d.locked = "YES".to_string());
        Ok(())
    }

    async fn unlock(&self, server: &str, name: &str) -> RemoteResult<()> {
        self.record(Call::Unlock {
            server: server.to_string(),
            name: name.to_string(),
        })?;
        self.modify(server, name, |d| d.locked = "no".to_string());
        Ok(())
    }

    async fn update_password(&self, server: &str, name: &str, password: &str) -> RemoteResult<()> {
        self.record(Call::UpdatePassword {
            server: server.to_string(),
            name: name.to_string(),
            password: password.to_string(),
        })
    }

    async fn assign_schedule(
        &self,
        server: &str,
        name: &str,
        domain: &str,
        schedule: Option<&str>,
    ) -> RemoteResult<()> {
        self.record(Call::AssignSchedule {
            server: server.to_string(),
            name: name.to_string(),
            domain: domain.to_string(),
            schedule: schedule.map(str::to_string),
        })
    }

    async fn decommission(&self, server: &str, name: &str) -> RemoteResult<()> {
        self.record(Call::Decommission {
            server: server.to_string(),
            name: name.to_string(),
        })?;
        self.modify(server, name, |d| d.decommissioned = "Yes".to_string());
        Ok(())
    }
}

/// Details as the server reports them for an existing client.
pub fn existing_details(name: &str) -> ClientDetails {
    ClientDetails {
        name: name.to_string(),
        contact: String::new(),
        deduplication: "ClientOrServer".to_string(),
        email: String::new(),
        authentication: "Local".to_string(),
        session_initiation: "ClientOrServer".to_string(),
        locked: "NO".to_string(),
        decommissioned: "No".to_string(),
        ssl_required: "Default".to_string(),
        option_set: String::new(),
        split_large_objects: "yes".to_string(),
        link: None,
    }
}

/// A valid desired client.
pub fn desired_client(server: &str, name: &str) -> ClientResource {
    ClientResource {
        password: Some(SecretString::new("s3cret".into())),
        domain: Some("STANDARD".to_string()),
        schedule: Some("DAILY_INCR".to_string()),
        ..ClientResource::new(server, name)
    }
}

pub fn listing_entry(server: &str, name: &str, domain: &str) -> BackupClient {
    BackupClient {
        name: name.to_string(),
        server: server.to_string(),
        platform: "Linux x86-64".to_string(),
        domain: domain.to_string(),
        ..Default::default()
    }
}
