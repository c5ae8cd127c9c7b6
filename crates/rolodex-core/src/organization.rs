//! Organization context for contact export.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Organization name and role attached to a contact at export time.
///
/// Empty strings mean "not supplied"; the encoder emits ORG and ROLE
/// lines independently of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgContext {
    pub name: String,
    pub role: String,
}

impl OrgContext {
    /// Creates a context with just an organization name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: String::new(),
        }
    }

    /// Creates a context with a name and a role.
    #[must_use]
    pub fn with_role(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }

    /// Returns whether neither name nor role is supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.role.is_empty()
    }
}

/// Looks up the organization context for a contact at export time.
///
/// The batch encoder threads each contact's external identifier through
/// this seam; the membership join itself lives with the caller.
pub trait OrganizationResolver {
    /// Returns the organization context for the contact, if any.
    fn resolve(&self, contact_id: Uuid) -> Option<OrgContext>;
}

/// In-memory resolver backed by a map, e.g. a prefetched membership join.
#[derive(Debug, Clone, Default)]
pub struct OrgDirectory {
    entries: HashMap<Uuid, OrgContext>,
}

impl OrgDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the organization context for a contact.
    pub fn insert(&mut self, contact_id: Uuid, org: OrgContext) {
        self.entries.insert(contact_id, org);
    }

    /// Returns the number of contacts with organization context.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the directory holds no context at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl OrganizationResolver for OrgDirectory {
    fn resolve(&self, contact_id: Uuid) -> Option<OrgContext> {
        self.entries.get(&contact_id).cloned()
    }
}

/// Resolver for callers without organization data.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOrganizations;

impl OrganizationResolver for NoOrganizations {
    fn resolve(&self, _contact_id: Uuid) -> Option<OrgContext> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_context_has_no_role() {
        let org = OrgContext::named("Acme Health");
        assert_eq!(org.name, "Acme Health");
        assert!(org.role.is_empty());
        assert!(!org.is_empty());
    }

    #[test]
    fn default_context_is_empty() {
        assert!(OrgContext::default().is_empty());
    }

    #[test]
    fn directory_resolves_known_contacts() {
        let known = Uuid::new_v4();
        let mut directory = OrgDirectory::new();
        directory.insert(known, OrgContext::with_role("Acme", "Buyer"));

        let org = directory.resolve(known).unwrap();
        assert_eq!(org.name, "Acme");
        assert_eq!(org.role, "Buyer");
        assert_eq!(directory.resolve(Uuid::new_v4()), None);
    }

    #[test]
    fn no_organizations_resolves_nothing() {
        assert_eq!(NoOrganizations.resolve(Uuid::new_v4()), None);
    }
}
