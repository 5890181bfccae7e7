//! Backup client lookup
//!
//! Read-only aggregation of the listing, details, at-risk, schedule and
//! filespace endpoints into one ClientQueryResult.

use std::sync::Arc;

use tracing::{debug, instrument};

use super::client::{non_empty, or_default};
use super::tracked;
use crate::adapters::parse_tri_state_bool;
use crate::error::{Error, Result};
use crate::metrics::observe_remote;
use crate::remote::OperationsCenter;
use crate::resource::{
    Authentication, ClientQueryResult, Deduplication, SessionInitiation, SslRequired,
};

/// Lookup options
#[derive(Clone, Copy, Debug)]
pub struct QueryOptions {
    /// Fetch the client's filespaces
    pub filespaces: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self { filespaces: true }
    }
}

/// Looks up registered clients by name and server
pub struct ClientQuery<C: ?Sized> {
    remote: Arc<C>,
    options: QueryOptions,
}

impl<C: OperationsCenter + ?Sized> ClientQuery<C> {
    pub fn new(remote: Arc<C>) -> Self {
        Self {
            remote,
            options: QueryOptions::default(),
        }
    }

    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    /// Look up a client by name on a server.
    ///
    /// If the listing contains the pair more than once, the first entry wins.
    /// Any failing sub-call fails the whole lookup.
    #[instrument(skip(self))]
    pub async fn lookup(&self, name: &str, server_name: &str) -> Result<ClientQueryResult> {
        tracked("lookup", self.lookup_client(name, server_name)).await
    }

    async fn lookup_client(&self, name: &str, server_name: &str) -> Result<ClientQueryResult> {
        let clients = observe_remote("list_clients", self.remote.list_clients().await)?;
        let client = clients
            .into_iter()
            .find(|c| c.name == name && c.server == server_name)
            .ok_or_else(|| {
                Error::not_found(format!(
                    "no backup client named {} found on server {}",
                    name, server_name
                ))
            })?;
        debug!(domain = %client.domain, "Found client in listing");

        let details = observe_remote(
            "client_details",
            self.remote.client_details(server_name, name).await,
        )?
        .ok_or_else(|| {
            Error::not_found(format!(
                "details of backup client {} on server {} are empty",
                name, server_name
            ))
        })?;

        let at_risk = observe_remote("at_risk", self.remote.at_risk(server_name, name).await)?;

        let schedules = observe_remote(
            "schedules",
            self.remote
                .schedules(server_name, &client.domain, name)
                .await,
        )?;

        let filespaces = if self.options.filespaces {
            let filespaces =
                observe_remote("filespaces", self.remote.filespaces(server_name, name).await)?;
            Some(filespaces.into_iter().map(Into::into).collect())
        } else {
            None
        };

        Ok(ClientQueryResult {
            name: client.name,
            server_name: client.server,
            platform: client.platform,
            domain: client.domain,
            locked: client.locked != 0,
            version: client.version,
            vm_owner: client.vm_owner,
            guid: client.guid,
            link: client.link,
            client_type: client.client_type,
            vm_type: client.vm_type,
            contact: non_empty(details.contact),
            deduplication: or_default(&details.deduplication, Deduplication::from_remote)?,
            email: non_empty(details.email),
            authentication: or_default(&details.authentication, Authentication::from_remote)?,
            session_initiation: or_default(
                &details.session_initiation,
                SessionInitiation::from_remote,
            )?,
            decommissioned: parse_tri_state_bool(&details.decommissioned)?,
            ssl_required: or_default(&details.ssl_required, SslRequired::from_remote)?,
            option_set: non_empty(details.option_set),
            split_large_objects: parse_tri_state_bool(&details.split_large_objects)?,
            at_risk: parse_tri_state_bool(&at_risk.at_risk)?,
            schedules: schedules.into_iter().map(Into::into).collect(),
            filespaces,
        })
    }
}
