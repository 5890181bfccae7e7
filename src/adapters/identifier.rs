//! Client identifier codec
//!
//! A client is identified by `serverName/name`. This string is the only
//! state the declarative framework persists for a client.

use crate::error::{Error, Result};

/// Separator between server and client name
pub const SEPARATOR: char = '/';

/// Build the identifier for a client on a server
pub fn encode(server_name: &str, name: &str) -> Result<String> {
    check_component("server name", server_name)?;
    check_component("client name", name)?;
    Ok(format!("{}{}{}", server_name, SEPARATOR, name))
}

/// Recover `(server_name, name)` from an identifier
pub fn decode(id: &str) -> Result<(String, String)> {
    let (server_name, name) = id.split_once(SEPARATOR).ok_or_else(|| {
        Error::malformed_identifier(format!("'{}' has no '{}' separator", id, SEPARATOR))
    })?;

    if server_name.is_empty() || name.is_empty() {
        return Err(Error::malformed_identifier(format!(
            "'{}' has an empty server or client name",
            id
        )));
    }
    if name.contains(SEPARATOR) {
        return Err(Error::malformed_identifier(format!(
            "'{}' has more than two components",
            id
        )));
    }

    Ok((server_name.to_string(), name.to_string()))
}

fn check_component(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::malformed_identifier(format!("{} is empty", what)));
    }
    if value.contains(SEPARATOR) {
        return Err(Error::malformed_identifier(format!(
            "{} '{}' contains '{}'",
            what, value, SEPARATOR
        )));
    }
    Ok(())
}
