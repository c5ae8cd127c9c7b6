//! Cross-cutting vCard codec tests.

mod import;
