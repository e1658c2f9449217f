//! String literal quoting for generated expressions.

use serde_json::Value;

/// Quote `text` as a double-quoted string literal safe to embed in an
/// expression. Line and paragraph separators are escaped as well, since
/// expression parsers treat them as line terminators.
pub fn string_value(text: &str) -> String {
    Value::String(text.to_owned())
        .to_string()
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_value() {
        assert_eq!(string_value("sum_p"), "\"sum_p\"");
        assert_eq!(string_value("a\"b"), "\"a\\\"b\"");
        assert_eq!(string_value("x\u{2028}y"), "\"x\\u2028y\"");
    }
}
