//! Core domain types for the rolodex CRM.
//!
//! Contact drafts, the shared field vocabulary, organization context for
//! exports, and the core error type. This crate is dependency-light,
//! performs no I/O, and holds no state; the vCard codec in `rolodex-rfc`
//! and the calling layers build on it.

pub mod contact;
pub mod error;
pub mod organization;
pub mod util;

pub use contact::{ContactDraft, ContactField};
pub use error::{CoreError, CoreResult};
pub use organization::{NoOrganizations, OrgContext, OrgDirectory, OrganizationResolver};
