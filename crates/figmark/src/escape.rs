//! HTML escaping for text content and attribute values.
//!
//! Both functions replace each character at most once in a single pass, so an
//! ampersand in the input always becomes exactly one `&amp;` and entities
//! produced for other characters are never escaped again.

/// Escape text content for inclusion between HTML tags.
///
/// Replaces `&`, `<`, `>`, `"` and `'`.
///
/// # Examples
///
/// ```
/// use figmark::escape_html;
///
/// assert_eq!(escape_html("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a value for a double-quoted HTML attribute.
///
/// Only `&`, `"` and `'` are replaced; angle brackets are legal inside a
/// quoted attribute value and are left as-is.
///
/// # Examples
///
/// ```
/// use figmark::escape_attribute;
///
/// assert_eq!(escape_attribute(r#"a<b "c""#), "a<b &quot;c&quot;");
/// ```
#[must_use]
pub fn escape_attribute(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
