//! Sanitization of submitted form fields.
//!
//! Every string field of a form submission passes through [`clean`] before
//! validation and before storage, so rendered pages never interpolate raw
//! user input.

/// Trim surrounding whitespace, then HTML-escape the value.
pub fn clean(raw: &str) -> String {
    escape_html(raw.trim())
}

/// Escape the characters with HTML significance.
///
/// The escape set matches the classic form-sanitizer set: `&`, `<`, `>`,
/// `"`, `'` and `/`.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}
