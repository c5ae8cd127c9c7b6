//! RFC format implementations.

pub mod vcard;
