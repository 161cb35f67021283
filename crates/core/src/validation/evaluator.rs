//! Rule evaluator — pure logic, no I/O.

use super::rules::{Check, FieldRule, Violation};

/// Evaluate every rule against the submitted fields.
///
/// All rules run, even after one fails for the same field, so a submission
/// comes back with its complete violation list in rule-table order. A field
/// absent from `fields` evaluates as empty.
pub fn evaluate(rules: &[FieldRule], fields: &[(&str, &str)]) -> Vec<Violation> {
    rules
        .iter()
        .filter_map(|rule| {
            let value = lookup(fields, rule.field);
            if passes(rule.check, value) {
                None
            } else {
                Some(Violation {
                    field: rule.field,
                    message: rule.message,
                })
            }
        })
        .collect()
}

fn lookup<'a>(fields: &[(&str, &'a str)], name: &str) -> &'a str {
    fields
        .iter()
        .find(|(field, _)| *field == name)
        .map(|(_, value)| *value)
        .unwrap_or("")
}

fn passes(check: Check, value: &str) -> bool {
    match check {
        Check::Required => !value.is_empty(),
        Check::MinLength(min) => value.chars().count() >= min,
        Check::MaxLength(max) => value.chars().count() <= max,
        // Vacuously true for the empty string; `Required` owns presence.
        Check::Alphanumeric => value.chars().all(|c| c.is_ascii_alphanumeric()),
    }
}
