//! Decoder tests against files as they arrive from the wild: multiple
//! records, surrounding noise, folding, and inconsistent line endings.

use super::fixtures::*;
use crate::rfc::vcard::parse::{parse, parse_with_report};

#[test_log::test]
fn multi_record_file_with_noise() {
    let report = parse_with_report(MULTI_RECORD_WITH_NOISE);

    assert_eq!(report.contacts.len(), 2);
    assert_eq!(report.contacts[0].first_name, "John");
    assert_eq!(report.contacts[1].first_name, "Jane");

    // The third block never terminates and is dropped whole.
    assert_eq!(report.dropped_blocks, 1);
}

#[test_log::test]
fn truncated_block_is_never_partially_included() {
    let contacts = parse(MULTI_RECORD_WITH_NOISE);
    assert!(contacts.iter().all(|c| c.first_name != "Tom"));
}

#[test_log::test]
fn empty_card_yields_no_contacts() {
    let report = parse_with_report(EMPTY_CARD);
    assert!(report.contacts.is_empty());
    assert_eq!(report.dropped_blocks, 1);
}

#[test_log::test]
fn folded_note_is_rejoined() {
    let contacts = parse(FOLDED_NOTE_CARD);
    assert_eq!(
        contacts[0].notes,
        "This note is wrapped across two physical lines"
    );
}

#[test_log::test]
fn lf_only_input_parses() {
    let contacts = parse(LF_ONLY_CARD);
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].notes, "first halfand second half");
}

#[test_log::test]
fn cr_only_input_parses() {
    let contacts = parse(CR_ONLY_CARD);
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].last_name, "Doe");
    assert_eq!(contacts[0].title, "Archivist");
}

#[test_log::test]
fn markers_match_case_insensitively() {
    let input = "Begin:VCard\nN:Doe;John;;;\nEnd:VCard\n";
    let contacts = parse(input);
    assert_eq!(contacts.len(), 1);
}

#[test_log::test]
fn text_without_any_blocks_is_empty_not_an_error() {
    let report = parse_with_report("nothing vCard-shaped in here\njust prose\n");
    assert!(report.contacts.is_empty());
    assert_eq!(report.dropped_blocks, 0);
    assert_eq!(report.skipped_lines, 0);
}

#[test_log::test]
fn decoded_drafts_are_preselected() {
    let contacts = parse(MULTI_RECORD_WITH_NOISE);
    assert!(contacts.iter().all(|c| c.selected));
}
