//! Category pages.

use axum::response::Html;

use larder_core::catalog::CategoryInput;
use larder_core::validation::Violation;
use larder_db::models::category::Category;
use larder_db::models::item::ItemSummary;

use super::{layout, violation_list};

/// All categories, linked to their detail pages.
pub fn list(categories: &[Category]) -> Html<String> {
    let mut body = String::new();
    if categories.is_empty() {
        body.push_str("<p>There are no categories yet.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for category in categories {
            body.push_str(&format!(
                "<li><a href=\"/category/{}\">{}</a></li>\n",
                category.id, category.name
            ));
        }
        body.push_str("</ul>\n");
    }
    layout("All Categories", &body)
}

/// One category plus the items that reference it.
pub fn detail(category: &Category, items: &[ItemSummary]) -> Html<String> {
    let mut body = format!("<p>{}</p>\n<h2>Items</h2>\n", category.description);
    body.push_str(&item_summaries(items));
    body.push_str(&format!(
        "<p><a href=\"/category/{id}/update\">Update</a> <a href=\"/category/{id}/delete\">Delete</a></p>\n",
        id = category.id
    ));
    layout(&format!("Category: {}", category.name), &body)
}

/// The create/update form. `values` carries the current (sanitized)
/// submission, or the stored record being edited.
pub fn form(
    title: &str,
    action: &str,
    values: &CategoryInput,
    violations: &[Violation],
) -> Html<String> {
    let body = format!(
        r#"{violations}<form method="post" action="{action}">
<p><label>Name: <input type="text" name="name" value="{name}"></label></p>
<p><label>Description: <textarea name="description">{description}</textarea></label></p>
<button type="submit">Submit</button>
</form>
"#,
        violations = violation_list(violations),
        name = values.name,
        description = values.description,
    );
    layout(title, &body)
}

/// The delete confirmation page. While items still reference the category
/// the form is withheld and the blockers are listed instead.
pub fn delete(category: &Category, items: &[ItemSummary]) -> Html<String> {
    let mut body = String::new();
    if items.is_empty() {
        body.push_str(&format!(
            "<p>Delete category <strong>{}</strong>?</p>\n<form method=\"post\" action=\"/category/{}/delete\">\n<button type=\"submit\">Delete</button>\n</form>\n",
            category.name, category.id
        ));
    } else {
        body.push_str(&format!(
            "<p>Category <strong>{}</strong> cannot be deleted while these items reference it:</p>\n",
            category.name
        ));
        body.push_str(&item_summaries(items));
    }
    layout("Delete Category", &body)
}

fn item_summaries(items: &[ItemSummary]) -> String {
    if items.is_empty() {
        return "<p>This category has no items.</p>\n".to_string();
    }
    let mut out = String::from("<ul>\n");
    for item in items {
        out.push_str(&format!(
            "<li><a href=\"/item/{}\">{}</a>: {}</li>\n",
            item.id, item.name, item.description
        ));
    }
    out.push_str("</ul>\n");
    out
}
