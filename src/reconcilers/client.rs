//! Backup client reconciler
//!
//! Maps the ClientResource lifecycle onto Operations Center calls:
//! - Create: probe, register, optional lock, read back
//! - Read: fetch details and normalize them
//! - Update: one call per changed mutable attribute, read back
//! - Delete: decommission

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument};

use super::tracked;
use crate::adapters::{build_register_request, identifier, parse_tri_state_bool};
use crate::error::{Error, Result};
use crate::metrics::observe_remote;
use crate::remote::{ClientDetails, OperationsCenter};
use crate::resource::{
    Authentication, ClientResource, Deduplication, SessionInitiation, SslRequired,
};

const RESERVED_CHARACTERS: [char; 3] = [' ', '*', '?'];

/// Validate a desired ClientResource
pub fn validate(client: &ClientResource) -> Result<()> {
    // Validate name
    if client.name.is_empty() {
        return Err(Error::validation("Client name must be specified"));
    }
    if !client
        .name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return Err(Error::validation(format!(
            "Invalid client name '{}': may only contain alphanumeric characters, '.', or '-'",
            client.name
        )));
    }

    // Validate required attributes
    if client.server_name.is_empty() {
        return Err(Error::validation("Server name must be specified"));
    }
    let password = exposed(&client.password).unwrap_or_default();
    if password.is_empty() {
        return Err(Error::validation("A password must be specified"));
    }
    if client.domain.as_deref().unwrap_or_default().is_empty() {
        return Err(Error::validation("A policy domain must be specified"));
    }

    // Validate free-form attributes
    let free_form = [
        ("server_name", Some(client.server_name.as_str())),
        ("password", Some(password)),
        ("domain", client.domain.as_deref()),
        ("contact", client.contact.as_deref()),
        ("email", client.email.as_deref()),
        ("schedule", client.schedule.as_deref()),
        ("option_set", client.option_set.as_deref()),
    ];
    for (attribute, value) in free_form {
        if let Some(value) = value {
            if value.contains(RESERVED_CHARACTERS) {
                return Err(Error::validation(format!(
                    "Invalid {}: may not contain ' ', '*', or '?'",
                    attribute
                )));
            }
        }
    }

    Ok(())
}

/// Reconciles ClientResource state against the Operations Center
pub struct ClientReconciler<C: ?Sized> {
    remote: Arc<C>,
}

impl<C: ?Sized> Clone for ClientReconciler<C> {
    fn clone(&self) -> Self {
        Self {
            remote: self.remote.clone(),
        }
    }
}

impl<C: OperationsCenter + ?Sized> ClientReconciler<C> {
    /// Create a reconciler around a shared remote handle
    pub fn new(remote: Arc<C>) -> Self {
        Self { remote }
    }

    /// Register a new client and return its observed state.
    ///
    /// Fails with `AlreadyExists` if the server already knows the client,
    /// including clients registered outside this provider.
    #[instrument(skip(self, desired), fields(server = %desired.server_name, name = %desired.name))]
    pub async fn create(&self, desired: &ClientResource) -> Result<ClientResource> {
        tracked("create", self.create_client(desired)).await
    }

    /// Fetch the observed state of a client.
    ///
    /// `Ok(None)` means the client no longer exists and the caller should
    /// forget the identifier.
    #[instrument(skip(self))]
    pub async fn read(&self, id: &str) -> Result<Option<ClientResource>> {
        tracked("read", self.read_client(id)).await
    }

    /// Apply changes to mutable attributes and return the refreshed state.
    #[instrument(skip(self, old, new), fields(server = %old.server_name, name = %old.name))]
    pub async fn update(&self, old: &ClientResource, new: &ClientResource) -> Result<ClientResource> {
        tracked("update", self.update_client(old, new)).await
    }

    /// Decommission a client. The record stays on the server.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<()> {
        tracked("delete", self.delete_client(id)).await
    }

    async fn create_client(&self, desired: &ClientResource) -> Result<ClientResource> {
        validate(desired)?;
        let id = desired.identifier()?;
        let (server, name) = (desired.server_name.as_str(), desired.name.as_str());

        let existing = observe_remote("client_details", self.remote.client_details(server, name).await)?;
        if existing.is_some() {
            return Err(Error::AlreadyExists {
                server_name: server.to_string(),
                name: name.to_string(),
            });
        }

        let request = build_register_request(desired)?;
        observe_remote(
            "register_client",
            self.remote.register_client(server, &request).await,
        )?;
        info!(id = %id, "Registered client");

        // Registration has no lock flag
        if desired.locked {
            observe_remote("lock", self.remote.lock(server, name).await)?;
            info!(id = %id, "Locked client");
        }

        self.refresh(&id, desired).await
    }

    async fn read_client(&self, id: &str) -> Result<Option<ClientResource>> {
        let (server, name) = identifier::decode(id)?;

        let details = observe_remote("client_details", self.remote.client_details(&server, &name).await)?;
        let Some(details) = details else {
            debug!(id = %id, "Client no longer exists");
            return Ok(None);
        };

        from_details(id, server, name, details).map(Some)
    }

    async fn update_client(&self, old: &ClientResource, new: &ClientResource) -> Result<ClientResource> {
        if let Some(attribute) = old.changed_creation_only_attribute(new) {
            return Err(Error::ImmutableAttributeChanged { attribute });
        }
        validate(new)?;

        let id = match &old.id {
            Some(id) => id.clone(),
            None => old.identifier()?,
        };
        let (server, name) = identifier::decode(&id)?;

        if old.locked != new.locked {
            if new.locked {
                observe_remote("lock", self.remote.lock(&server, &name).await)?;
                info!(id = %id, "Locked client");
            } else {
                observe_remote("unlock", self.remote.unlock(&server, &name).await)?;
                info!(id = %id, "Unlocked client");
            }
        }

        if exposed(&old.password) != exposed(&new.password) {
            // validate() guarantees a password on `new`
            let password = exposed(&new.password).unwrap_or_default();
            observe_remote(
                "update_password",
                self.remote.update_password(&server, &name, password).await,
            )?;
            info!(id = %id, "Updated client password");
        }

        // The server assigns domain and schedule as a pair
        if old.schedule != new.schedule || old.domain != new.domain {
            let domain = new.domain.as_deref().unwrap_or_default();
            let schedule = new.schedule.as_deref().filter(|s| !s.is_empty());
            observe_remote(
                "assign_schedule",
                self.remote
                    .assign_schedule(&server, &name, domain, schedule)
                    .await,
            )?;
            info!(id = %id, domain = %domain, schedule = ?schedule, "Assigned client schedule");
        }

        self.refresh(&id, new).await
    }

    async fn delete_client(&self, id: &str) -> Result<()> {
        let (server, name) = identifier::decode(id)?;

        observe_remote("decommission", self.remote.decommission(&server, &name).await)?;
        info!(id = %id, "Decommissioned client");

        Ok(())
    }

    /// Shared read-back closing Create and Update
    async fn refresh(&self, id: &str, desired: &ClientResource) -> Result<ClientResource> {
        let mut observed = self
            .read_client(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("client {} vanished during reconciliation", id)))?;
        observed.carry_unobserved(desired);
        Ok(observed)
    }
}

/// Normalize client details into a ClientResource
fn from_details(
    id: &str,
    server_name: String,
    name: String,
    details: ClientDetails,
) -> Result<ClientResource> {
    let split_large_objects = parse_tri_state_bool(&details.split_large_objects)?;
    let locked = parse_tri_state_bool(&details.locked)?;

    Ok(ClientResource {
        id: Some(id.to_string()),
        server_name,
        name,
        authentication: or_default(&details.authentication, Authentication::from_remote)?,
        password: None,
        domain: None,
        contact: non_empty(details.contact),
        email: non_empty(details.email),
        schedule: None,
        option_set: non_empty(details.option_set),
        deduplication: or_default(&details.deduplication, Deduplication::from_remote)?,
        ssl_required: or_default(&details.ssl_required, SslRequired::from_remote)?,
        session_initiation: or_default(
            &details.session_initiation,
            SessionInitiation::from_remote,
        )?,
        locked,
        link: details.link.and_then(non_empty),
        decommissioned: non_empty(details.decommissioned),
        split_large_objects: Some(split_large_objects),
    })
}

fn exposed(password: &Option<SecretString>) -> Option<&str> {
    password.as_ref().map(|p| p.expose_secret())
}

pub(crate) fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

pub(crate) fn or_default<T: Default>(value: &str, parse: fn(&str) -> Result<T>) -> Result<T> {
    if value.is_empty() {
        Ok(T::default())
    } else {
        parse(value)
    }
}
