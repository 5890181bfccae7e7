//! Yes/no boolean codec
//!
//! The Operations Center reports booleans as "yes"/"no" strings, with
//! inconsistent capitalisation between endpoints.

use crate::error::{Error, Result};

/// Parse a yes/no string into a boolean.
///
/// Only `yes` and `no` are accepted, in any ASCII case. Anything else,
/// including `true`/`false` or surrounding whitespace, is a contract
/// violation by the server.
pub fn parse_tri_state_bool(value: &str) -> Result<bool> {
    if value.eq_ignore_ascii_case("yes") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("no") {
        Ok(false)
    } else {
        Err(Error::MalformedBooleanEncoding {
            value: value.to_string(),
        })
    }
}
