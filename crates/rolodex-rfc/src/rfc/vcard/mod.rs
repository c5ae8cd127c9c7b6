//! vCard implementation (RFC 2426 / RFC 6350 family, 3.0 semantics).
//!
//! This module provides the contact import/export codec: serializing
//! contact drafts into vCard 3.0 text and decoding arbitrary vCard files
//! back into drafts for review.
//!
//! ## Overview
//!
//! The encoder emits a fixed property order so exported files are
//! byte-stable for a given input. The decoder is deliberately lenient:
//! vCard producers in the wild are inconsistent, so it tolerates CRLF, LF,
//! and CR line endings, folded lines, legacy vCard 2.1 bare TYPE tokens,
//! multiple records per file, and unrelated text around and between
//! blocks, extracting whatever usable contact data exists.
//!
//! ## Usage
//!
//! ### Decoding
//!
//! ```rust
//! use rolodex_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! N:Doe;John;;;\r\n\
//! EMAIL;TYPE=WORK:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let drafts = parse(input);
//! assert_eq!(drafts[0].first_name, "John");
//! assert_eq!(drafts[0].email_work, "john@example.com");
//! ```
//!
//! ### Encoding
//!
//! ```rust
//! use rolodex_core::contact::ContactDraft;
//! use rolodex_rfc::rfc::vcard::serialize_single;
//!
//! let mut draft = ContactDraft::new();
//! draft.first_name = "Jane".to_string();
//! draft.last_name = "Doe".to_string();
//!
//! let output = serialize_single(&draft, None);
//! assert!(output.contains("FN:Jane Doe"));
//! ```
//!
//! ## Submodules
//!
//! - [`escape`] - Text escaping/unescaping and structured-value splitting
//! - [`parse`] - The lenient decoder
//! - [`build`] - The encoder and export helpers

pub mod build;
pub mod escape;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use build::{
    DEFAULT_EXPORT_FILENAME, VCARD_EXTENSION, VCARD_MIME, export_filename, serialize,
    serialize_single,
};
pub use parse::{ParseReport, parse, parse_single, parse_with_report};
