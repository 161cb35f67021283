//! Item pages.

use axum::response::Html;

use larder_core::catalog::ItemInput;
use larder_core::validation::Violation;
use larder_db::models::category::Category;
use larder_db::models::item::{Item, ItemWithCategory};

use super::{layout, violation_list};

/// All items, linked to their detail pages.
pub fn list(items: &[Item]) -> Html<String> {
    let mut body = String::new();
    if items.is_empty() {
        body.push_str("<p>There are no items yet.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for item in items {
            body.push_str(&format!(
                "<li><a href=\"/item/{}\">{}</a></li>\n",
                item.id, item.name
            ));
        }
        body.push_str("</ul>\n");
    }
    layout("All Items", &body)
}

/// One item, joined with its owning category.
pub fn detail(item: &ItemWithCategory) -> Html<String> {
    let body = format!(
        r#"<p>{description}</p>
<ul>
<li>Stock: {stock}</li>
<li>Price: {price}</li>
<li>Category: <a href="/category/{category_id}">{category_name}</a></li>
</ul>
<p><a href="/item/{id}/update">Update</a> <a href="/item/{id}/delete">Delete</a></p>
"#,
        description = item.description,
        stock = item.stock,
        price = item.price,
        category_id = item.category_id,
        category_name = item.category_name,
        id = item.id,
    );
    layout(&format!("Item: {}", item.name), &body)
}

/// The create/update form with the category dropdown. `values` carries the
/// current (sanitized) submission, or the stored record being edited.
pub fn form(
    title: &str,
    action: &str,
    values: &ItemInput,
    categories: &[Category],
    violations: &[Violation],
) -> Html<String> {
    let mut options = String::from("<option value=\"\">--Select a category--</option>\n");
    for category in categories {
        let id = category.id.to_string();
        let selected = if values.category == id { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{id}\"{selected}>{name}</option>\n",
            name = category.name
        ));
    }

    let body = format!(
        r#"{violations}<form method="post" action="{action}">
<p><label>Name: <input type="text" name="name" value="{name}"></label></p>
<p><label>Description: <textarea name="description">{description}</textarea></label></p>
<p><label>Stock: <input type="text" name="stock" value="{stock}"></label></p>
<p><label>Price: <input type="text" name="price" value="{price}"></label></p>
<p><label>Category: <select name="category">
{options}</select></label></p>
<button type="submit">Submit</button>
</form>
"#,
        violations = violation_list(violations),
        name = values.name,
        description = values.description,
        stock = values.stock,
        price = values.price,
    );
    layout(title, &body)
}

/// The delete confirmation page. Item deletes are never blocked.
pub fn delete(item: &ItemWithCategory) -> Html<String> {
    let body = format!(
        "<p>Delete item <strong>{}</strong> from category {}?</p>\n<form method=\"post\" action=\"/item/{}/delete\">\n<button type=\"submit\">Delete</button>\n</form>\n",
        item.name, item.category_name, item.id
    );
    layout("Delete Item", &body)
}
