use serde_json::Value;

/// Upstream fields are loosely typed: null, empty strings, zero and `false` all mean "unset".
pub(crate) fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// First candidate that is present, in order.
pub(crate) fn first_present<'a, I>(candidates: I) -> Option<&'a Value>
where
    I: IntoIterator<Item = Option<&'a Value>>,
{
    candidates.into_iter().flatten().find(|v| is_present(v))
}

/// Render a scalar as display text; strings are taken verbatim.
pub(crate) fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Numbers pass through; numeric strings are parsed. Anything else is `None`.
pub(crate) fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zero_and_empty_are_absent() {
        assert!(!is_present(&json!(null)));
        assert!(!is_present(&json!("")));
        assert!(!is_present(&json!(0)));
        assert!(!is_present(&json!(false)));
        assert!(is_present(&json!("A")));
        assert!(is_present(&json!(91.5)));
    }

    #[test]
    fn first_present_skips_blank_candidates() {
        let a = json!("");
        let b = json!(null);
        let c = json!("https://example.com");
        let picked = first_present([Some(&a), None, Some(&b), Some(&c)]);
        assert_eq!(picked, Some(&c));
    }

    #[test]
    fn numeric_strings_parse() {
        assert_eq!(to_number(&json!("12.5")), Some(12.5));
        assert_eq!(to_number(&json!(40)), Some(40.0));
        assert_eq!(to_number(&json!("n/a")), None);
        assert_eq!(to_text(&json!(1234)), "1234");
    }
}
