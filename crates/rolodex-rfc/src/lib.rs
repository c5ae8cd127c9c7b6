//! RFC text-format support for the rolodex CRM.
//!
//! Currently this covers the vCard contact interchange format
//! (RFC 2426 / RFC 6350 family, 3.0 semantics) used by the import and
//! export flows.

pub mod error;
pub mod rfc;

pub use error::{RfcError, RfcResult};
