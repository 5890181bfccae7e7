//! Adapters between the resource model and the Operations Center wire format

pub mod identifier;
mod registration;
pub mod tri_state;

pub use registration::*;
pub use tri_state::parse_tri_state_bool;
