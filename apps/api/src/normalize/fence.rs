const FENCE: &str = "```";

/// Language hints recognised even when the content follows on the same line.
const KNOWN_HINTS: &[&str] = &["json", "json5", "jsonc", "javascript", "js"];

/// Strips a wrapping ```` ```json ... ``` ```` or ```` ``` ... ``` ```` fence from model output.
///
/// Text right after the opening fence is a language hint only when it is a
/// known hint (`json`, `JSON`, `javascript`, ...) or a bare word alone on the
/// first line. Otherwise it is content and kept. Opening and closing fences are
/// removed independently, so a response that only opens a fence is still cleaned.
pub fn strip_code_fence(text: &str) -> &str {
    let mut text = text.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        text = skip_language_hint(rest);
    }

    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }

    text.trim()
}

fn skip_language_hint(rest: &str) -> &str {
    let hint_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+')))
        .unwrap_or(rest.len());
    let (hint, after) = rest.split_at(hint_len);

    let own_line = after.starts_with(|c: char| c == '\n' || c == '\r');
    let known = KNOWN_HINTS.iter().any(|h| h.eq_ignore_ascii_case(hint));
    if own_line || known {
        after
    } else {
        rest
    }
}
