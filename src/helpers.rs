use percent_encoding::percent_decode_str;
use serde_json::Value;

/// Structural equality with numbers compared by value, so `1` and `1.0` are
/// equal.
pub(crate) fn equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => left.as_f64() == right.as_f64(),
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left.iter().zip(right.iter()).all(|(l, r)| equal(l, r))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, l)| right.get(key).map_or(false, |r| equal(l, r)))
        }
        (_, _) => left == right,
    }
}

fn parse_index(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Walk `document` by a JSON Pointer (the part after `#`). Each segment is
/// `~1` / `~0` decoded and then percent-decoded; all-digit segments index into
/// arrays.
pub(crate) fn pointer<'a>(document: &'a Value, pointer: &str) -> Option<&'a Value> {
    if pointer.is_empty() {
        return Some(document);
    }
    if !pointer.starts_with('/') {
        return None;
    }
    let mut target = document;
    for token in pointer.split('/').skip(1) {
        let token = token.replace("~1", "/").replace("~0", "~");
        let token = percent_decode_str(&token).decode_utf8().ok()?;
        target = match target {
            Value::Object(map) => map.get(token.as_ref())?,
            Value::Array(list) => list.get(parse_index(&token)?)?,
            _ => return None,
        };
    }
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!(1), json!(1.0), true)]
    #[test_case(json!([1, 2]), json!([1.0, 2.0]), true)]
    #[test_case(json!({"a": 1}), json!({"a": 1.0}), true)]
    #[test_case(json!({"a": 1}), json!({"a": 1, "b": 2}), false)]
    #[test_case(json!("1"), json!(1), false)]
    fn equality(left: Value, right: Value, expected: bool) {
        assert_eq!(equal(&left, &right), expected)
    }

    #[test]
    fn pointer_walk() {
        let document = json!({"definitions": {"a/b": {"type": "string"}, "items": [1, 2]}});
        assert_eq!(
            pointer(&document, "/definitions/a~1b"),
            Some(&json!({"type": "string"}))
        );
        assert_eq!(pointer(&document, "/definitions/items/1"), Some(&json!(2)));
        assert_eq!(pointer(&document, "/definitions/missing"), None);
        assert_eq!(pointer(&document, ""), Some(&document));
        assert_eq!(pointer(&document, "definitions"), None);
    }

    #[test]
    fn pointer_percent_decoding() {
        let document = json!({"definitions": {"a b": 1, "~tilde": 2}});
        assert_eq!(pointer(&document, "/definitions/a%20b"), Some(&json!(1)));
        assert_eq!(pointer(&document, "/definitions/~0tilde"), Some(&json!(2)));
    }
}
