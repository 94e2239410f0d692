use serde_json::Value;

/// Finds every top-level, brace-balanced `{...}` fragment in `text`, in order.
///
/// Braces inside JSON string literals do not count towards nesting. When an
/// object is still open at the end of the text (a truncated wrapper or a stray
/// `{` in prose), that opening brace is skipped and the rest is scanned again,
/// so complete objects nested inside it are still found.
pub fn json_object_fragments(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut from = 0;
    while let Some(unclosed) = scan_balanced(text, from, &mut fragments) {
        from = unclosed + 1;
    }
    fragments
}

/// Collects balanced objects starting at byte `from`. Returns the position of
/// the outermost `{` left open at the end, if any.
fn scan_balanced<'a>(text: &'a str, from: usize, fragments: &mut Vec<&'a str>) -> Option<usize> {
    let mut depth = 0usize;
    let mut start = from;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[from..].char_indices() {
        let i = from + offset;
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            // Quotes in surrounding prose are not string delimiters.
            '"' if depth > 0 => in_string = true,
            '{' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    fragments.push(&text[start..=i]);
                }
            }
            _ => {}
        }
    }

    (depth > 0).then_some(start)
}

/// Reassembles fragments as `[f1,f2,...]` and parses that.
///
/// If the joined array is not valid JSON, each fragment is parsed on its own
/// and only the valid ones are kept.
pub fn parse_fragments(fragments: &[&str]) -> Vec<Value> {
    if fragments.is_empty() {
        return Vec::new();
    }

    let joined = format!("[{}]", fragments.join(","));
    match serde_json::from_str::<Vec<Value>>(&joined) {
        Ok(values) => values,
        Err(_) => fragments
            .iter()
            .filter_map(|f| serde_json::from_str::<Value>(f).ok())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_braces_no_fragments() {
        assert!(json_object_fragments("Sorry, I cannot help with that.").is_empty());
    }

    #[test]
    fn test_fragments_amid_prose() {
        let text = r#"Here you go: {"a": 1} and also {"b": 2}. Done."#;
        assert_eq!(json_object_fragments(text), vec![r#"{"a": 1}"#, r#"{"b": 2}"#]);
    }

    #[test]
    fn test_nested_objects_stay_in_one_fragment() {
        let text = r#"{"outer": {"inner": {"x": 1}}} trailing"#;
        assert_eq!(
            json_object_fragments(text),
            vec![r#"{"outer": {"inner": {"x": 1}}}"#]
        );
    }

    #[test]
    fn test_braces_inside_strings_are_ignored() {
        let text = r#"{"q": "What does {} mean in \"Rust\"?"} {"q": "}"}"#;
        let fragments = json_object_fragments(text);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[1], r#"{"q": "}"}"#);
    }

    #[test]
    fn test_quotes_in_prose_do_not_open_strings() {
        let text = r#"The model said "ok" then {"a": 1}"#;
        assert_eq!(json_object_fragments(text), vec![r#"{"a": 1}"#]);
    }

    #[test]
    fn test_objects_inside_truncated_wrapper_are_found() {
        let text = r#"{"questions": [{"a": 1}, {"b": {"c": 2}}, {"d": "#;
        assert_eq!(
            json_object_fragments(text),
            vec![r#"{"a": 1}"#, r#"{"b": {"c": 2}}"#]
        );
    }

    #[test]
    fn test_stray_open_brace_in_prose_is_skipped() {
        let text = "Here you go {as requested:\n{\"a\": 1} {\"b\": 2}";
        assert_eq!(json_object_fragments(text), vec![r#"{"a": 1}"#, r#"{"b": 2}"#]);
    }

    #[test]
    fn test_unterminated_object_is_dropped() {
        let text = r#"{"a": 1} {"b": "#;
        assert_eq!(json_object_fragments(text), vec![r#"{"a": 1}"#]);
    }

    #[test]
    fn test_concatenated_objects_without_separator() {
        let text = r#"{"a":1}{"b":2}"#;
        let values = parse_fragments(&json_object_fragments(text));
        assert_eq!(values, vec![json!({"a": 1}), json!({"b": 2})]);
    }

    #[test]
    fn test_invalid_fragment_is_skipped_not_fatal() {
        let fragments = [r#"{"a": 1}"#, r#"{not json}"#, r#"{"c": 3}"#];
        assert_eq!(
            parse_fragments(&fragments),
            vec![json!({"a": 1}), json!({"c": 3})]
        );
    }

    #[test]
    fn test_parse_fragments_empty() {
        assert!(parse_fragments(&[]).is_empty());
    }
}
