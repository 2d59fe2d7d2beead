//! Data models for the record editor client.
//!
//! Wire types match the backend JSON contract exactly (snake_case keys,
//! `resource_version` / `original_resource` field names).

mod record;
mod session;
mod wire;

pub use record::*;
pub use session::*;
pub use wire::*;
