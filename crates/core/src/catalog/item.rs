//! Item form input, draft, and field rules.

use serde::Deserialize;

use crate::error::CoreError;
use crate::sanitize;
use crate::types::DbId;
use crate::validation::{evaluate, Check, FieldRule, Violation};

/// Raw item form submission, before sanitization and validation.
///
/// `category` carries the owning category id as submitted by the form's
/// dropdown, still a string at this point.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stock: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub category: String,
}

impl ItemInput {
    /// Trim and HTML-escape every field. Validation and storage both
    /// operate on the sanitized values.
    pub fn sanitized(self) -> Self {
        Self {
            name: sanitize::clean(&self.name),
            description: sanitize::clean(&self.description),
            stock: sanitize::clean(&self.stock),
            price: sanitize::clean(&self.price),
            category: sanitize::clean(&self.category),
        }
    }
}

/// A sanitized item draft that passed every field rule.
///
/// The category reference is parsed to an id here; whether it resolves to a
/// live category is checked against the store by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub stock: String,
    pub price: String,
    pub category_id: DbId,
}

impl ItemDraft {
    /// Re-check that every required field survived into the draft.
    ///
    /// Drafts are only built by [`validate_item`], so this cannot fail in
    /// practice; mutation handlers still call it before persisting.
    pub fn ensure_complete(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("name", &self.name),
            ("description", &self.description),
            ("stock", &self.stock),
            ("price", &self.price),
        ] {
            if value.is_empty() {
                return Err(CoreError::Validation(format!(
                    "missing required field: {field}"
                )));
            }
        }
        Ok(())
    }
}

const ITEM_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        check: Check::Required,
        message: "Item name must be specified.",
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
        field: "stock",
        check: Check::Required,
        message: "Stock must be specified.",
    },
    FieldRule {
        field: "price",
        check: Check::Required,
        message: "Price must be specified.",
    },
    // Length of the text, not a numeric check. Inherited behaviour; see
    // DESIGN.md before changing.
    FieldRule {
        field: "price",
        check: Check::MinLength(5),
        message: "Price must be at least 5 characters.",
    },
    FieldRule {
        field: "category",
        check: Check::Required,
        message: "Category must be specified.",
    },
];

/// Validate a sanitized item submission.
///
/// Expects input that already went through [`ItemInput::sanitized`].
/// Returns the draft, or every rule violation in table order. A category
/// value that is present but not a well-formed id is reported as a
/// violation on the `category` field.
pub fn validate_item(input: &ItemInput) -> Result<ItemDraft, Vec<Violation>> {
    let fields = [
        ("name", input.name.as_str()),
        ("description", input.description.as_str()),
        ("stock", input.stock.as_str()),
        ("price", input.price.as_str()),
        ("category", input.category.as_str()),
    ];
    let mut violations = evaluate(ITEM_RULES, &fields);

    let category_id = input.category.parse::<DbId>().ok();
    if !input.category.is_empty() && category_id.is_none() {
        violations.push(Violation {
            field: "category",
            message: "Category reference is invalid.",
        });
    }

    match category_id {
        Some(category_id) if violations.is_empty() => Ok(ItemDraft {
            name: input.name.clone(),
            description: input.description.clone(),
            stock: input.stock.clone(),
            price: input.price.clone(),
            category_id,
        }),
        _ => Err(violations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, description: &str, stock: &str, price: &str, category: &str) -> ItemInput {
        ItemInput {
            name: name.to_string(),
            description: description.to_string(),
            stock: stock.to_string(),
            price: price.to_string(),
            category: category.to_string(),
        }
        .sanitized()
    }

    fn apple(price: &str) -> ItemInput {
        input("Apple", "Red", "10", price, "1")
    }

    #[test]
    fn valid_input_produces_draft() {
        let draft = validate_item(&apple("12.00")).unwrap();
        assert_eq!(draft.name, "Apple");
        assert_eq!(draft.stock, "10");
        assert_eq!(draft.price, "12.00");
        assert_eq!(draft.category_id, 1);
    }

    #[test]
    fn price_of_four_characters_rejected() {
        let violations = validate_item(&apple("5.99")).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "price");
        assert_eq!(violations[0].message, "Price must be at least 5 characters.");
    }

    #[test]
    fn price_of_exactly_five_characters_accepted() {
        assert!(validate_item(&apple("12.00")).is_ok());
    }

    #[test]
    fn single_character_price_rejected() {
        let violations = validate_item(&apple("5")).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "price");
    }

    #[test]
    fn empty_price_collects_both_price_violations() {
        let violations = validate_item(&apple("")).unwrap_err();
        let messages: Vec<_> = violations.iter().map(|v| v.message).collect();
        assert_eq!(
            messages,
            vec![
                "Price must be specified.",
                "Price must be at least 5 characters.",
            ]
        );
    }

    #[test]
    fn non_alphanumeric_name_rejected() {
        let violations =
            validate_item(&input("Green Apple", "Red", "10", "12.00", "1")).unwrap_err();
        assert_eq!(violations[0].field, "name");
    }

    #[test]
    fn missing_category_rejected() {
        let violations = validate_item(&input("Apple", "Red", "10", "12.00", "")).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "Category must be specified.");
    }

    #[test]
    fn malformed_category_reference_rejected() {
        let violations = validate_item(&input("Apple", "Red", "10", "12.00", "abc")).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "Category reference is invalid.");
    }

    #[test]
    fn empty_submission_reports_every_field() {
        let violations = validate_item(&input("", "", "", "", "")).unwrap_err();
        let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec!["name", "description", "stock", "price", "price", "category"]
        );
    }

    #[test]
    fn fields_are_sanitized_before_validation() {
        let draft = validate_item(&input(" Apple ", " Red ", " 10 ", " 12.00 ", " 1 ")).unwrap();
        assert_eq!(draft.name, "Apple");
        assert_eq!(draft.price, "12.00");
    }

    #[test]
    fn complete_draft_passes_recheck() {
        let draft = validate_item(&apple("12.00")).unwrap();
        assert!(draft.ensure_complete().is_ok());
    }
}
