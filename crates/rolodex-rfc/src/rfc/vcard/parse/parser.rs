//! vCard file decoder.
//!
//! Walks `BEGIN:VCARD`/`END:VCARD` blocks in arbitrary text and extracts
//! contact drafts. Anything unusable is dropped, never raised: lines
//! without a separator or value are skipped, blocks without a terminator
//! or without usable contact data are discarded whole.

use rolodex_core::contact::{ContactDraft, ContactField};
use serde::Serialize;

use super::lexer::{ContentLine, parse_content_line, unfold};
use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::escape::{split_structured, unescape_text};

/// Record delimiters. Matched case-insensitively on input.
const BEGIN_MARKER: &str = "BEGIN:VCARD";
const END_MARKER: &str = "END:VCARD";

/// Untyped TEL lines fall back through these slots in order.
const TEL_SLOTS: [ContactField; 3] = [
    ContactField::PhoneMobile,
    ContactField::PhoneOffice,
    ContactField::PhoneHome,
];

/// Untyped EMAIL lines fall back through these slots in order.
const EMAIL_SLOTS: [ContactField; 2] = [ContactField::EmailWork, ContactField::EmailPersonal];

/// Outcome of decoding a vCard file.
///
/// `contacts` holds the usable drafts in source order; the counters say
/// what the lenient walk dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Usable contact drafts, in source order.
    pub contacts: Vec<ContactDraft>,
    /// Blocks without `END:VCARD` or without usable contact data.
    pub dropped_blocks: usize,
    /// Lines without a colon separator or with an empty value.
    pub skipped_lines: usize,
}

/// Parses every vCard block in the given text.
///
/// Never fails on malformed content: unusable lines and blocks are
/// dropped and whatever remains is returned in source order. An empty
/// result means the text held no usable contact data.
#[must_use]
pub fn parse(input: &str) -> Vec<ContactDraft> {
    parse_with_report(input).contacts
}

/// Parses a single-card intake (e.g. a shared vCard).
///
/// ## Errors
/// Returns an error if the text contains no usable contact, so callers
/// can report a failed share distinctly from an empty import.
pub fn parse_single(input: &str) -> RfcResult<ContactDraft> {
    parse(input)
        .into_iter()
        .next()
        .ok_or_else(|| RfcError::ParseError("no usable contact in vCard text".to_string()))
}

/// Parses every vCard block and reports what was dropped.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
#[must_use]
pub fn parse_with_report(input: &str) -> ParseReport {
    tracing::debug!("Decoding vCard text");

    let unfolded = unfold(input);
    let mut report = ParseReport::default();

    for chunk in split_after_markers(&unfolded, BEGIN_MARKER) {
        let Some(end) = find_ignore_case(chunk, END_MARKER, 0) else {
            tracing::trace!("Dropping block without END:VCARD");
            report.dropped_blocks += 1;
            continue;
        };

        match parse_block(&chunk[..end], &mut report) {
            Some(contact) => report.contacts.push(contact),
            None => {
                tracing::trace!("Dropping block without usable contact data");
                report.dropped_blocks += 1;
            }
        }
    }

    if report.contacts.is_empty() {
        tracing::warn!("No usable contacts found");
    }

    tracing::debug!(
        contacts = report.contacts.len(),
        dropped_blocks = report.dropped_blocks,
        skipped_lines = report.skipped_lines,
        "vCard decode complete"
    );

    report
}

/// Returns the text segments following each occurrence of `marker`,
/// ignoring ASCII case. Text before the first occurrence is not included.
fn split_after_markers<'a>(text: &'a str, marker: &str) -> Vec<&'a str> {
    let mut starts = Vec::new();
    let mut cursor = 0;

    while let Some(at) = find_ignore_case(text, marker, cursor) {
        cursor = at + marker.len();
        starts.push(cursor);
    }

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts
                .get(i + 1)
                .map_or(text.len(), |&next| next - marker.len());
            &text[start..end]
        })
        .collect()
}

/// Byte-wise case-insensitive substring search starting at `from`.
fn find_ignore_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = haystack.as_bytes();
    let pat = needle.as_bytes();

    if pat.is_empty() || hay.len() < pat.len() {
        return None;
    }

    (from..=hay.len() - pat.len()).find(|&i| hay[i..i + pat.len()].eq_ignore_ascii_case(pat))
}

/// Parses the body of one `BEGIN:VCARD` block into a draft.
///
/// Returns `None` when the block yields no name and no work email.
fn parse_block(body: &str, report: &mut ParseReport) -> Option<ContactDraft> {
    let mut draft = ContactDraft::new();
    let mut tel_slots = PositionalSlots::new(&TEL_SLOTS);
    let mut email_slots = PositionalSlots::new(&EMAIL_SLOTS);

    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let Some(content) = parse_content_line(line) else {
            report.skipped_lines += 1;
            continue;
        };

        apply_line(&mut draft, &content, &mut tel_slots, &mut email_slots);
    }

    draft.is_importable().then_some(draft)
}

/// Applies one content line to the draft under construction.
///
/// Properties outside the contact vocabulary (including ROLE and VERSION)
/// are ignored.
fn apply_line(
    draft: &mut ContactDraft,
    line: &ContentLine,
    tel_slots: &mut PositionalSlots,
    email_slots: &mut PositionalSlots,
) {
    match line.name.as_str() {
        "N" => apply_structured_name(draft, &line.value),
        "FN" => apply_formatted_name(draft, &unescape_text(&line.value)),
        "TITLE" => draft.title = unescape_text(&line.value),
        "ORG" => apply_organization(draft, &line.value),
        "TEL" => {
            let field = tel_field(&line.type_tags).unwrap_or_else(|| tel_slots.next_untyped());
            draft.set(field, unescape_text(&line.value));
        }
        "EMAIL" => {
            let field = email_field(&line.type_tags).unwrap_or_else(|| email_slots.next_untyped());
            draft.set(field, unescape_text(&line.value));
        }
        "ADR" => apply_address(draft, &line.value),
        "NOTE" => draft.notes = unescape_text(&line.value),
        _ => {}
    }
}

/// N components: family;given;additional;prefixes;suffixes. Only the
/// family and given slots map onto the draft, and N overwrites whatever
/// an earlier FN put there.
fn apply_structured_name(draft: &mut ContactDraft, raw: &str) {
    let parts = split_structured(raw);

    draft.last_name = parts.first().map(|s| unescape_text(s)).unwrap_or_default();
    draft.first_name = parts.get(1).map(|s| unescape_text(s)).unwrap_or_default();
}

/// FN is a fallback: it only applies while no name has been seen, so an N
/// line earlier in the block wins and one later overwrites it. The value
/// splits at the first space into given and remaining names.
fn apply_formatted_name(draft: &mut ContactDraft, value: &str) {
    if !draft.first_name.is_empty() || !draft.last_name.is_empty() {
        return;
    }

    match value.split_once(' ') {
        Some((first, rest)) => {
            draft.first_name = first.to_string();
            draft.last_name = rest.to_string();
        }
        None => draft.first_name = value.to_string(),
    }
}

/// ORG keeps only the organization name; units are not modeled.
fn apply_organization(draft: &mut ContactDraft, raw: &str) {
    draft.org_name = split_structured(raw)
        .first()
        .map(|s| unescape_text(s))
        .unwrap_or_default();
}

/// ADR components: pobox;extended;street;locality;region;postal;country.
/// A later ADR replaces the whole address, empty slots included.
fn apply_address(draft: &mut ContactDraft, raw: &str) {
    let parts = split_structured(raw);
    let component = |i: usize| parts.get(i).map(|s| unescape_text(s)).unwrap_or_default();

    draft.address_line2 = component(1);
    draft.address_line1 = component(2);
    draft.city = component(3);
    draft.state = component(4);
    draft.zip = component(5);
}

/// Maps TEL type tags to a draft field; `None` falls back to position.
fn tel_field(tags: &[String]) -> Option<ContactField> {
    let has = |tag: &str| tags.iter().any(|t| t == tag);

    if has("CELL") || has("MOBILE") {
        Some(ContactField::PhoneMobile)
    } else if has("WORK") {
        Some(ContactField::PhoneOffice)
    } else if has("HOME") {
        Some(ContactField::PhoneHome)
    } else {
        None
    }
}

/// Maps EMAIL type tags to a draft field; `None` falls back to position.
fn email_field(tags: &[String]) -> Option<ContactField> {
    let has = |tag: &str| tags.iter().any(|t| t == tag);

    if has("WORK") {
        Some(ContactField::EmailWork)
    } else if has("HOME") || has("PERSONAL") {
        Some(ContactField::EmailPersonal)
    } else {
        None
    }
}

/// Positional fallback for repeatable properties without a usable TYPE.
///
/// The counter advances only for untyped occurrences; typed lines assign
/// directly and do not consume a slot. Occurrences past the last slot all
/// land on it.
struct PositionalSlots {
    slots: &'static [ContactField],
    untyped_seen: usize,
}

impl PositionalSlots {
    const fn new(slots: &'static [ContactField]) -> Self {
        Self {
            slots,
            untyped_seen: 0,
        }
    }

    fn next_untyped(&mut self) -> ContactField {
        let index = self.untyped_seen.min(self.slots.len() - 1);
        self.untyped_seen += 1;
        self.slots[index]
    }
}
