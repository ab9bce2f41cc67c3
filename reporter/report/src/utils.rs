use serde_json::Value;

/// How an absent value renders in the report, matching the template
/// interpolation of the pipeline that produced the input documents.
pub const UNDEFINED: &str = "undefined";

/// Renders a JSON value the way template interpolation would: strings
/// verbatim, numbers and booleans via their display form, arrays
/// comma-joined with null elements empty, null as `null` and an absent
/// value as `undefined`. Objects render as compact JSON.
pub fn template_value(value: Option<&Value>) -> String {
    match value {
        None => UNDEFINED.to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(value)) => value.to_string(),
        Some(Value::Number(value)) => value.to_string(),
        Some(Value::Array(values)) => values
            .iter()
            .map(|value| match value {
                Value::Null => String::new(),
                other => template_value(Some(other)),
            })
            .collect::<Vec<String>>()
            .join(","),
        Some(value) => value.to_string(),
    }
}

/// Parses a throughput figure, which arrives as either a bare number or a
/// numeric string, possibly carrying a trailing unit. The longest numeric
/// prefix of a string wins; a value without one yields `NaN`, which formats
/// as `NaN` downstream.
pub fn parse_throughput(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(value)) => value.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(text)) => parse_float_prefix(text.trim()),
        _ => f64::NAN,
    }
}

// Longest prefix of the form [sign] digits [. digits] [e [sign] digits],
// with at least one digit. Safe to slice by byte offset since only ASCII
// bytes are consumed.
fn parse_float_prefix(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(&b'+') | Some(&b'-')) {
        end += 1;
    }
    let mut seen_digit = false;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
        seen_digit = true;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
            seen_digit = true;
        }
    }
    if !seen_digit {
        return f64::NAN;
    }
    if matches!(bytes.get(end), Some(&b'e') | Some(&b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(&b'+') | Some(&b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = exponent_end;
        while bytes.get(exponent_end).is_some_and(u8::is_ascii_digit) {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits {
            end = exponent_end;
        }
    }
    text[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_render_absent_value_as_undefined() {
        assert_eq!(template_value(None), "undefined");
    }

    #[test]
    fn should_render_null_as_null() {
        assert_eq!(template_value(Some(&Value::Null)), "null");
    }

    #[test]
    fn should_render_string_verbatim() {
        let value = json!("RANDOM_NANO");
        assert_eq!(template_value(Some(&value)), "RANDOM_NANO");
    }

    #[test]
    fn should_render_numbers_and_booleans() {
        assert_eq!(template_value(Some(&json!(16))), "16");
        assert_eq!(template_value(Some(&json!(0.5))), "0.5");
        assert_eq!(template_value(Some(&json!(false))), "false");
    }

    #[test]
    fn should_comma_join_arrays_with_empty_nulls() {
        let value = json!([1, null, "two", [3, 4]]);
        assert_eq!(template_value(Some(&value)), "1,,two,3,4");
    }

    #[test]
    fn should_parse_throughput_from_string_or_number() {
        assert_eq!(parse_throughput(Some(&json!("245.5"))), 245.5);
        assert_eq!(parse_throughput(Some(&json!(198))), 198.0);
    }

    #[test]
    fn should_parse_longest_numeric_prefix_of_throughput() {
        assert_eq!(parse_throughput(Some(&json!("245.5 MB/s"))), 245.5);
        assert_eq!(parse_throughput(Some(&json!("-3.5MB"))), -3.5);
        assert_eq!(parse_throughput(Some(&json!("12e3 msgs"))), 12000.0);
        assert_eq!(parse_throughput(Some(&json!("7.5e"))), 7.5);
    }

    #[test]
    fn should_yield_nan_for_unparseable_throughput() {
        assert!(parse_throughput(Some(&json!("fast"))).is_nan());
        assert!(parse_throughput(Some(&json!(""))).is_nan());
        assert!(parse_throughput(None).is_nan());
        assert!(parse_throughput(Some(&Value::Null)).is_nan());
    }
}
