//! vCard serialization and export helpers.
//!
//! Emits vCard 3.0 blocks with a fixed property order so exported files
//! are byte-stable for a given input: N and FN are always present, every
//! other property only when its field is set. TEL and EMAIL values are
//! passed through raw, the way vCard readers expect them.

use rolodex_core::contact::ContactDraft;
use rolodex_core::organization::{OrgContext, OrganizationResolver};
use rolodex_core::util::slug::slugify_or;
use uuid::Uuid;

use crate::rfc::vcard::escape::{escape_note, escape_text};

/// MIME type handed to the download sink.
pub const VCARD_MIME: &str = "text/vcard";

/// File extension for exported vCard files.
pub const VCARD_EXTENSION: &str = "vcf";

/// Suggested filename for multi-contact exports.
pub const DEFAULT_EXPORT_FILENAME: &str = "contacts.vcf";

const CRLF: &str = "\r\n";

/// Serializes one contact into a single vCard 3.0 block.
///
/// Every block is independently parseable; callers join blocks with CRLF
/// when batching. Organization context comes from the caller and is never
/// read from the draft itself, so a decoded `org_name` does not leak back
/// out on re-export.
#[must_use]
pub fn serialize_single(contact: &ContactDraft, org: Option<&OrgContext>) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(16);

    lines.push("BEGIN:VCARD".to_string());
    lines.push("VERSION:3.0".to_string());
    lines.push(format!(
        "N:{};{};;;",
        escape_text(&contact.last_name),
        escape_text(&contact.first_name)
    ));
    lines.push(format!("FN:{}", escape_text(&contact.display_name())));

    if !contact.title.is_empty() {
        lines.push(format!("TITLE:{}", escape_text(&contact.title)));
    }

    if let Some(org) = org {
        if !org.name.is_empty() {
            lines.push(format!("ORG:{}", escape_text(&org.name)));
        }
        if !org.role.is_empty() {
            lines.push(format!("ROLE:{}", escape_text(&org.role)));
        }
    }

    if !contact.phone_mobile.is_empty() {
        lines.push(format!("TEL;TYPE=CELL:{}", contact.phone_mobile));
    }
    if !contact.phone_office.is_empty() {
        lines.push(format!("TEL;TYPE=WORK,VOICE:{}", contact.phone_office));
    }
    if !contact.phone_home.is_empty() {
        lines.push(format!("TEL;TYPE=HOME,VOICE:{}", contact.phone_home));
    }

    if !contact.email_work.is_empty() {
        lines.push(format!("EMAIL;TYPE=WORK:{}", contact.email_work));
    }
    if !contact.email_personal.is_empty() {
        lines.push(format!("EMAIL;TYPE=HOME:{}", contact.email_personal));
    }

    if has_address(contact) {
        lines.push(format!(
            "ADR;TYPE=WORK:;{};{};{};{};{};",
            escape_text(&contact.address_line2),
            escape_text(&contact.address_line1),
            escape_text(&contact.city),
            escape_text(&contact.state),
            escape_text(&contact.zip)
        ));
    }

    if !contact.notes.is_empty() {
        lines.push(format!("NOTE:{}", escape_note(&contact.notes)));
    }

    lines.push("END:VCARD".to_string());
    lines.join(CRLF)
}

/// ADR is emitted when any routable component is present; an extended
/// address line alone does not trigger it.
fn has_address(contact: &ContactDraft) -> bool {
    !contact.address_line1.is_empty()
        || !contact.city.is_empty()
        || !contact.state.is_empty()
        || !contact.zip.is_empty()
}

/// Serializes a batch of contacts, one block per entry, CRLF separated.
///
/// Organization context is looked up per contact id through the caller's
/// resolver.
#[must_use]
pub fn serialize<R>(entries: &[(Uuid, ContactDraft)], orgs: &R) -> String
where
    R: OrganizationResolver,
{
    entries
        .iter()
        .map(|(contact_id, contact)| {
            let org = orgs.resolve(*contact_id);
            serialize_single(contact, org.as_ref())
        })
        .collect::<Vec<_>>()
        .join(CRLF)
}

/// Suggests a download filename for a single-contact export.
#[must_use]
pub fn export_filename(contact: &ContactDraft) -> String {
    let stem = slugify_or(&contact.display_name(), "contact");
    format!("{stem}.{VCARD_EXTENSION}")
}

#[cfg(test)]
mod tests {
    use rolodex_core::organization::{NoOrganizations, OrgDirectory};

    use super::*;

    fn sample_contact() -> ContactDraft {
        let mut draft = ContactDraft::new();
        draft.first_name = "John".to_string();
        draft.last_name = "Doe".to_string();
        draft.title = "Director".to_string();
        draft.phone_mobile = "111".to_string();
        draft.phone_office = "222".to_string();
        draft.phone_home = "333".to_string();
        draft.email_work = "a@x.com".to_string();
        draft.email_personal = "b@x.com".to_string();
        draft.address_line1 = "99 Main St".to_string();
        draft.address_line2 = "Unit 4".to_string();
        draft.city = "Anytown".to_string();
        draft.state = "CA".to_string();
        draft.zip = "12345".to_string();
        draft.notes = "Hi".to_string();
        draft
    }

    #[test]
    fn field_order_is_stable() {
        let org = OrgContext::with_role("Acme", "Ops");
        let output = serialize_single(&sample_contact(), Some(&org));

        let expected = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Doe;John;;;\r\n\
FN:John Doe\r\n\
TITLE:Director\r\n\
ORG:Acme\r\n\
ROLE:Ops\r\n\
TEL;TYPE=CELL:111\r\n\
TEL;TYPE=WORK,VOICE:222\r\n\
TEL;TYPE=HOME,VOICE:333\r\n\
EMAIL;TYPE=WORK:a@x.com\r\n\
EMAIL;TYPE=HOME:b@x.com\r\n\
ADR;TYPE=WORK:;Unit 4;99 Main St;Anytown;CA;12345;\r\n\
NOTE:Hi\r\n\
END:VCARD";

        assert_eq!(output, expected);
    }

    #[test]
    fn empty_draft_still_has_n_and_fn() {
        let output = serialize_single(&ContactDraft::new(), None);

        assert_eq!(
            output,
            "BEGIN:VCARD\r\nVERSION:3.0\r\nN:;;;;\r\nFN:\r\nEND:VCARD"
        );
    }

    #[test]
    fn no_trailing_newline_after_end() {
        let output = serialize_single(&ContactDraft::new(), None);
        assert!(output.ends_with("END:VCARD"));
    }

    #[test]
    fn phones_and_emails_are_not_escaped() {
        let mut draft = ContactDraft::new();
        draft.first_name = "John".to_string();
        draft.phone_mobile = "555;0100".to_string();

        let output = serialize_single(&draft, None);
        assert!(output.contains("TEL;TYPE=CELL:555;0100"));
    }

    #[test]
    fn extended_address_alone_does_not_emit_adr() {
        let mut draft = ContactDraft::new();
        draft.first_name = "John".to_string();
        draft.address_line2 = "Unit 4".to_string();

        let output = serialize_single(&draft, None);
        assert!(!output.contains("ADR"));
    }

    #[test]
    fn zip_alone_emits_adr() {
        let mut draft = ContactDraft::new();
        draft.first_name = "John".to_string();
        draft.zip = "12345".to_string();

        let output = serialize_single(&draft, None);
        assert!(output.contains("ADR;TYPE=WORK:;;;;;12345;"));
    }

    #[test]
    fn empty_org_context_emits_nothing() {
        let output = serialize_single(&sample_contact(), Some(&OrgContext::default()));
        assert!(!output.contains("ORG:"));
        assert!(!output.contains("ROLE:"));
    }

    #[test]
    fn batch_joins_blocks_with_crlf() {
        let mut second = ContactDraft::new();
        second.first_name = "Jane".to_string();

        let entries = vec![
            (Uuid::new_v4(), sample_contact()),
            (Uuid::new_v4(), second),
        ];

        let output = serialize(&entries, &NoOrganizations);
        assert!(output.contains("END:VCARD\r\nBEGIN:VCARD"));
        assert_eq!(output.matches("BEGIN:VCARD").count(), 2);
    }

    #[test]
    fn batch_resolves_org_per_contact() {
        let with_org = Uuid::new_v4();
        let without_org = Uuid::new_v4();

        let mut directory = OrgDirectory::new();
        directory.insert(with_org, OrgContext::named("Coastal Health"));

        let entries = vec![
            (with_org, sample_contact()),
            (without_org, sample_contact()),
        ];

        let output = serialize(&entries, &directory);
        assert_eq!(output.matches("ORG:Coastal Health").count(), 1);
    }

    #[test]
    fn export_filename_slugs_the_display_name() {
        let mut draft = ContactDraft::new();
        draft.first_name = "Anne".to_string();
        draft.last_name = "O'Brien".to_string();

        assert_eq!(export_filename(&draft), "anne-o-brien.vcf");
    }

    #[test]
    fn export_filename_falls_back_for_nameless_drafts() {
        assert_eq!(export_filename(&ContactDraft::new()), "contact.vcf");
    }
}
