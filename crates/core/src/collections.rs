//! Parsing of serialized collection columns.
//!
//! Content rows store small collections (tags, related posts, page sections)
//! as text. Older rows hold a JSON array, newer ones a comma-separated list.
//! Both decode into an ordered sequence; nothing here ever fails.

use serde_json::Value;

/// Parse a stored collection into a list of strings.
///
/// - `None`, `""` -> empty list
/// - text starting with `[` -> JSON array; malformed JSON -> empty list
/// - anything else -> comma-split, trimmed, empty tokens dropped
///
/// JSON elements that are not strings are rendered as their JSON text;
/// `null` elements are skipped.
///
/// # Examples
///
/// ```
/// use aimterior_core::collections::parse_string_list;
///
/// assert_eq!(parse_string_list(Some(r#"["a","b"]"#)), vec!["a", "b"]);
/// assert_eq!(parse_string_list(Some(" a , ,b ")), vec!["a", "b"]);
/// assert!(parse_string_list(Some("[broken")).is_empty());
/// assert!(parse_string_list(None).is_empty());
/// ```
pub fn parse_string_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    if raw.starts_with('[') {
        return parse_json_array(raw)
            .into_iter()
            .filter_map(|value| match value {
                Value::Null => None,
                Value::String(s) => Some(s),
                other => Some(other.to_string()),
            })
            .collect();
    }

    split_comma_list(raw)
}

/// Parse a stored collection that may hold structured elements.
///
/// Same policy as [`parse_string_list`], but JSON elements are kept as-is so
/// page sections can carry objects. Comma-separated text becomes a list of
/// JSON strings.
pub fn parse_value_list(raw: Option<&str>) -> Vec<Value> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    if raw.starts_with('[') {
        return parse_json_array(raw);
    }

    split_comma_list(raw).into_iter().map(Value::String).collect()
}

fn parse_json_array(raw: &str) -> Vec<Value> {
    serde_json::from_str::<Vec<Value>>(raw).unwrap_or_default()
}

fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
