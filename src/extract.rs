//! Best-effort extraction of a JSON object from free-text model output.
//!
//! Models asked for JSON often wrap it in prose or code fences. The
//! contract here is deliberately lossy: try the whole text, then the
//! outermost brace span, then give up and let the caller fall back.

use serde::de::DeserializeOwned;

/// Slice from the first `{` to the last `}` inclusive, or `None` when
/// either brace is missing or they are out of order.
pub fn json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Two-step parse: strict parse of the whole text first, then of the
/// brace span. `None` when neither deserializes.
///
/// A response holding several JSON objects yields the span from the
/// first `{` to the last `}`, which may include prose between them and
/// fail to parse. That loss is accepted; there is no per-field recovery.
pub fn extract_json<T: DeserializeOwned>(text: &str) -> Option<T> {
    if let Ok(value) = serde_json::from_str(text) {
        return Some(value);
    }
    let span = json_span(text)?;
    serde_json::from_str(span).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn span_covers_outermost_braces() {
        assert_eq!(json_span("ab {\"x\": 1} cd"), Some("{\"x\": 1}"));
        assert_eq!(json_span("{\"a\": {\"b\": 2}}"), Some("{\"a\": {\"b\": 2}}"));
    }

    #[test]
    fn span_requires_ordered_braces() {
        assert_eq!(json_span("no braces at all"), None);
        assert_eq!(json_span("} backwards {"), None);
        assert_eq!(json_span("only open {"), None);
    }

    #[test]
    fn parses_object_embedded_in_prose() {
        let text = "Here is my analysis:\n{\"priority_level\": \"high\"}\nHope that helps!";
        let value: Value = extract_json(text).unwrap();
        assert_eq!(value["priority_level"], "high");
    }

    #[test]
    fn parses_bare_object_without_slicing() {
        let value: Value = extract_json("{\"a\": 1}").unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn gives_up_on_malformed_span() {
        // Two objects: the outermost span includes the prose between them.
        let text = "{\"a\": 1} and also {\"b\": 2}";
        assert_eq!(extract_json::<Value>(text), None);
        assert_eq!(extract_json::<Value>("not json"), None);
        assert_eq!(extract_json::<Value>("{broken"), None);
    }
}
