//! Result-set rendering
//!
//! One result set becomes one `<table>`, built as markup text and handed to
//! the output region as-is. The engine's column and row order is preserved
//! exactly; there is no sorting, truncation, or pagination.

use querypad_types::ResultSet;
use serde_json::Value;

/// Render one result set: a header cell per column and one body row per
/// value row. Row widths are not cross-checked against the header.
pub fn result_table(result: &ResultSet) -> String {
    let head = cells(result.columns.iter().cloned(), "th");
    let body = cells(
        result
            .values
            .iter()
            .map(|row| cells(row.iter().map(scalar_text), "td")),
        "tr",
    );
    format!(r#"<table class="table"><thead>{head}</thead><tbody>{body}</tbody></table>"#)
}

/// Engine scalars as displayable text: strings verbatim, SQL NULL as an
/// empty cell, everything else via its JSON text.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Wrap each value in `tag`; an empty sequence yields an empty section.
fn cells<I>(vals: I, tag: &str) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut out = String::new();
    for val in vals {
        out.push('<');
        out.push_str(tag);
        out.push('>');
        out.push_str(&val);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
    out
}
