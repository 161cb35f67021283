//! Validation rule and violation types.

use serde::Serialize;

/// A single check applied to one submitted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// The field must be present with a non-empty value.
    Required,
    /// The value must be at least this many characters.
    MinLength(usize),
    /// The value must be at most this many characters.
    MaxLength(usize),
    /// Every character must be ASCII alphanumeric.
    Alphanumeric,
}

/// A declarative per-field rule: one check and the message reported when it
/// fails. Rule tables are ordered; violations come back in table order.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub check: Check,
    pub message: &'static str,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}
