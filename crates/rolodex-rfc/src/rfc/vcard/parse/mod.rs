//! vCard parsing.
//!
//! The decoder is deliberately lenient: malformed lines and blocks are
//! counted and dropped rather than raised, and whatever usable contact
//! data exists is extracted. See [`ParseReport`] for what a decode drops.

pub mod lexer;
pub mod parser;

pub use lexer::{ContentLine, parse_content_line, parse_type_tags, unfold};
pub use parser::{ParseReport, parse, parse_single, parse_with_report};
