//! Pure domain logic for the larder catalog.
//!
//! Everything in this crate is synchronous and I/O-free: type aliases for
//! database primitives, the error taxonomy, input sanitization, the field
//! rule engine, and the catalog drafts built from validated form input.

pub mod catalog;
pub mod error;
pub mod sanitize;
pub mod types;
pub mod validation;
