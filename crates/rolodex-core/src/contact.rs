//! Contact draft records and the shared field vocabulary.
//!
//! A [`ContactDraft`] is the in-memory contact representation shared by
//! the vCard encoder and decoder: encoder input for export, decoder output
//! for import review. Fields use empty strings for "absent", matching the
//! text columns the row store carries.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// An editable contact record.
///
/// Instances are created fresh per encode/decode call and carry no
/// identity of their own; callers thread external identifiers alongside
/// when they need them. The `selected` flag preselects a decoded draft in
/// the import review table and is not part of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub email_work: String,
    pub email_personal: String,
    pub phone_mobile: String,
    pub phone_office: String,
    pub phone_home: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub notes: String,
    /// Organization name derived from the ORG property on import; never
    /// merged into the contact row itself.
    pub org_name: String,
    /// Import-review preselection. Defaults to true.
    pub selected: bool,
}

impl Default for ContactDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            title: String::new(),
            email_work: String::new(),
            email_personal: String::new(),
            phone_mobile: String::new(),
            phone_office: String::new(),
            phone_home: String::new(),
            address_line1: String::new(),
            address_line2: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            notes: String::new(),
            org_name: String::new(),
            selected: true,
        }
    }
}

impl ContactDraft {
    /// Creates an empty draft with `selected` set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Formats as a display name (first + last, trimmed).
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Returns whether the draft identifies a usable contact.
    ///
    /// A draft with no first name, no last name, and no work email is an
    /// empty shell and is not worth importing.
    #[must_use]
    pub fn is_importable(&self) -> bool {
        !self.first_name.is_empty() || !self.last_name.is_empty() || !self.email_work.is_empty()
    }

    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Title => &self.title,
            ContactField::EmailWork => &self.email_work,
            ContactField::EmailPersonal => &self.email_personal,
            ContactField::PhoneMobile => &self.phone_mobile,
            ContactField::PhoneOffice => &self.phone_office,
            ContactField::PhoneHome => &self.phone_home,
            ContactField::AddressLine1 => &self.address_line1,
            ContactField::AddressLine2 => &self.address_line2,
            ContactField::City => &self.city,
            ContactField::State => &self.state,
            ContactField::Zip => &self.zip,
            ContactField::Notes => &self.notes,
            ContactField::OrgName => &self.org_name,
        }
    }

    /// Sets the value of a field.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::FirstName => self.first_name = value,
            ContactField::LastName => self.last_name = value,
            ContactField::Title => self.title = value,
            ContactField::EmailWork => self.email_work = value,
            ContactField::EmailPersonal => self.email_personal = value,
            ContactField::PhoneMobile => self.phone_mobile = value,
            ContactField::PhoneOffice => self.phone_office = value,
            ContactField::PhoneHome => self.phone_home = value,
            ContactField::AddressLine1 => self.address_line1 = value,
            ContactField::AddressLine2 => self.address_line2 = value,
            ContactField::City => self.city = value,
            ContactField::State => self.state = value,
            ContactField::Zip => self.zip = value,
            ContactField::Notes => self.notes = value,
            ContactField::OrgName => self.org_name = value,
        }
    }
}

/// The field vocabulary shared by forms, the row store, and the codec.
///
/// Form plumbing updates drafts through this enum instead of string keys,
/// so an unsupported field is a compile error rather than a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FirstName,
    LastName,
    Title,
    EmailWork,
    EmailPersonal,
    PhoneMobile,
    PhoneOffice,
    PhoneHome,
    AddressLine1,
    AddressLine2,
    City,
    State,
    Zip,
    Notes,
    OrgName,
}

impl ContactField {
    /// Every field, in row-store column order.
    pub const ALL: [Self; 15] = [
        Self::FirstName,
        Self::LastName,
        Self::Title,
        Self::EmailWork,
        Self::EmailPersonal,
        Self::PhoneMobile,
        Self::PhoneOffice,
        Self::PhoneHome,
        Self::AddressLine1,
        Self::AddressLine2,
        Self::City,
        Self::State,
        Self::Zip,
        Self::Notes,
        Self::OrgName,
    ];

    /// Returns the row-store column name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Title => "title",
            Self::EmailWork => "email_work",
            Self::EmailPersonal => "email_personal",
            Self::PhoneMobile => "phone_mobile",
            Self::PhoneOffice => "phone_office",
            Self::PhoneHome => "phone_home",
            Self::AddressLine1 => "address_line1",
            Self::AddressLine2 => "address_line2",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
            Self::Notes => "notes",
            Self::OrgName => "org_name",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContactField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::ValidationError(format!("unknown contact field: {s}")))
    }
}
