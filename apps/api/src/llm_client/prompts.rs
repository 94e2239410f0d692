// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Closing instruction appended to every prompt that expects a JSON object.
pub const JSON_OBJECT_ONLY: &str =
    "Return ONLY valid JSON, no markdown, no code blocks, no explanations.";

/// Closing instruction appended to every prompt that expects a JSON array.
pub const JSON_ARRAY_ONLY: &str = "Return ONLY a valid JSON array. \
    Do NOT wrap it in an object. \
    Do NOT use markdown code fences. \
    Do NOT include any text before or after the array.";

/// Fills `{name}` placeholders in a single pass. Inserted values are never
/// rescanned, so a value containing `{other}` stays literal. Unknown
/// placeholders and stray braces are left as they are.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let hit = values.iter().find(|(name, _)| {
            tail.starts_with(name) && tail[name.len()..].starts_with('}')
        });
        match hit {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
