//! Server-rendered HTML views.
//!
//! Each page is a typed builder: it takes the payload its page needs and
//! returns the rendered document. Submitted strings are sanitized before
//! validation and storage, so interpolating them here does not escape them
//! a second time; any other dynamic text goes through
//! [`larder_core::sanitize::escape_html`].

pub mod category;
pub mod item;

use axum::http::StatusCode;
use axum::response::Html;

use larder_core::sanitize::escape_html;
use larder_core::validation::Violation;

/// Shared document shell with the site navigation.
pub(crate) fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{title} | Larder</title></head>
<body>
<nav>
<a href="/">Home</a>
<a href="/categories">All categories</a>
<a href="/item_list">All items</a>
<a href="/category/create">Create category</a>
<a href="/item/create">Create item</a>
</nav>
<h1>{title}</h1>
{body}</body>
</html>
"#
    ))
}

/// Render the violation list shown above a re-presented form.
pub(crate) fn violation_list(violations: &[Violation]) -> String {
    if violations.is_empty() {
        return String::new();
    }
    let mut out = String::from("<ul class=\"violations\">\n");
    for violation in violations {
        out.push_str(&format!("<li>{}</li>\n", violation.message));
    }
    out.push_str("</ul>\n");
    out
}

/// The home page: catalog totals.
pub fn index(num_categories: i64, num_items: i64) -> Html<String> {
    let body = format!(
        "<p>The catalog currently holds:</p>\n<ul>\n<li>Categories: {num_categories}</li>\n<li>Items: {num_items}</li>\n</ul>\n"
    );
    layout("Larder Home", &body)
}

/// Generic error page used by the HTTP error mapper.
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let title = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = format!("<p>{}</p>\n", escape_html(message));
    layout(&title, &body)
}
