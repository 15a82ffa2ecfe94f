//! Diff generation for audit logging
//!
//! Summarizes which top-level fields of a contact changed during an edit.

use serde_json::Value;

const MAX_SHOWN_CHARS: usize = 50;

/// Describe the changed top-level fields of two JSON objects
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        return (before != after)
            .then(|| format!("{} -> {}", format_value(before), format_value(after)));
    };

    let mut changes = Vec::new();

    for (key, before_val) in before_obj {
        match after_obj.get(key) {
            Some(after_val) if after_val != before_val => changes.push(format!(
                "{}: {} -> {}",
                key,
                format_value(before_val),
                format_value(after_val)
            )),
            Some(_) => {}
            None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
        }
    }

    for (key, after_val) in after_obj {
        if !before_obj.contains_key(key) {
            changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
        }
    }

    (!changes.is_empty()).then(|| changes.join(", "))
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > MAX_SHOWN_CHARS => {
            let shown: String = s.chars().take(MAX_SHOWN_CHARS - 3).collect();
            format!("\"{}...\"", shown)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_field_change() {
        let before = json!({"ID": 1, "Name": "Alice", "Email": "alice@example.com"});
        let after = json!({"ID": 1, "Name": "Alicia", "Email": "alice@example.com"});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "Name: \"Alice\" -> \"Alicia\"");
    }

    #[test]
    fn test_multiple_changes() {
        let before = json!({"Name": "A", "Email": "a@x.io", "Phone": ""});
        let after = json!({"Name": "A", "Email": "b@x.io", "Phone": "555"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("Email: \"a@x.io\" -> \"b@x.io\""));
        assert!(diff.contains("Phone: \"\" -> \"555\""));
        assert!(!diff.contains("Name:"));
    }

    #[test]
    fn test_field_added_and_removed() {
        let before = json!({"Name": "Test", "Old": 1});
        let after = json!({"Name": "Test", "New": 2});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("Old: 1 -> (removed)"));
        assert!(diff.contains("New: (added) -> 2"));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"Name": "Test", "ID": 100});
        assert!(generate_diff(&value, &value.clone()).is_none());
    }

    #[test]
    fn test_non_object_values() {
        assert_eq!(
            generate_diff(&json!(1), &json!(2)),
            Some("1 -> 2".to_string())
        );
    }

    #[test]
    fn test_long_string_truncation() {
        let before = json!({"Name": "é".repeat(100)});
        let after = json!({"Name": "short"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!("test")), "\"test\"");
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({"a": 1, "b": 2})), "{2 fields}");
    }
}
