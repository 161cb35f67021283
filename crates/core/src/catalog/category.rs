//! Category form input, draft, and field rules.

use serde::Deserialize;

use crate::error::CoreError;
use crate::sanitize;
use crate::validation::{evaluate, Check, FieldRule, Violation};

/// Raw category form submission, before sanitization and validation.
///
/// Fields default to empty so a submission may omit any of them; omitted
/// fields then fail their `Required` rule instead of rejecting the request
/// at the deserialization layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CategoryInput {
    /// Trim and HTML-escape every field. Validation and storage both
    /// operate on the sanitized values.
    pub fn sanitized(self) -> Self {
        Self {
            name: sanitize::clean(&self.name),
            description: sanitize::clean(&self.description),
        }
    }
}

/// A sanitized category draft that passed every field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

impl CategoryDraft {
    /// Re-check that every required field survived into the draft.
    ///
    /// Drafts are only built by [`validate_category`], so this cannot fail
    /// in practice; mutation handlers still call it before persisting.
    pub fn ensure_complete(&self) -> Result<(), CoreError> {
        for (field, value) in [("name", &self.name), ("description", &self.description)] {
            if value.is_empty() {
                return Err(CoreError::Validation(format!(
                    "missing required field: {field}"
                )));
            }
        }
        Ok(())
    }
}

const CATEGORY_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        check: Check::Required,
        message: "Category name must be specified.",
    },
    FieldRule {
        field: "name",
        check: Check::MaxLength(50),
        message: "Category name must be at most 50 characters.",
    },
    FieldRule {
        field: "name",
        check: Check::Alphanumeric,
        message: "Name has non-alphanumeric characters.",
    },
    FieldRule {
        field: "description",
        check: Check::Required,
        message: "Description must be specified.",
    },
    FieldRule {
        field: "description",
        check: Check::MaxLength(500),
        message: "Description must be at most 500 characters.",
    },
];

/// Validate a sanitized category submission.
///
/// Expects input that already went through [`CategoryInput::sanitized`].
/// Returns the draft, or every rule violation in table order.
pub fn validate_category(input: &CategoryInput) -> Result<CategoryDraft, Vec<Violation>> {
    let fields = [
        ("name", input.name.as_str()),
        ("description", input.description.as_str()),
    ];
    let violations = evaluate(CATEGORY_RULES, &fields);
    if violations.is_empty() {
        Ok(CategoryDraft {
            name: input.name.clone(),
            description: input.description.clone(),
        })
    } else {
        Err(violations)
    }
}
