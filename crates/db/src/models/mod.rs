//! Row models and projections.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus the projections its pages need. Write inputs are
//! the validated drafts from `larder_core::catalog`, not separate DTOs.

pub mod category;
pub mod item;
