//! Text cleanup for captured variable fields.

/// Separator that marks a trailing line comment inside a default value.
const TRAILING_COMMENT: &str = " # ";

/// Replace newlines and tabs with spaces, squeeze runs of whitespace to a
/// single space and trim both ends.
pub fn collapse_whitespace(input: &str) -> String {
    input.replace(['\n', '\t'], " ").split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop one leading `"` and one trailing `"`, each checked on its own.
///
/// A lone `"` is consumed entirely.
pub fn strip_surrounding_quotes(input: &str) -> &str {
    let s = input.strip_prefix('"').unwrap_or(input);
    s.strip_suffix('"').unwrap_or(s)
}

/// Generic cleanup applied to every field.
pub fn clean(input: &str) -> String {
    strip_surrounding_quotes(&collapse_whitespace(input)).to_string()
}

/// Cut a raw default value at the first ` # ` and remove every `"` from
/// what is kept. Values without a comment are returned unchanged.
pub fn strip_trailing_comment(raw: &str) -> String {
    match raw.split_once(TRAILING_COMMENT) {
        Some((value, _comment)) => value.replace('"', ""),
        None => raw.to_string(),
    }
}

/// Append ` }` or ` ]` to an object or list literal whose closing delimiter
/// was cut off by the block grammar.
pub fn close_truncated(value: &str) -> String {
    if value.starts_with('{') && !value.ends_with('}') {
        format!("{value} }}")
    } else if value.starts_with('[') && !value.ends_with(']') {
        format!("{value} ]")
    } else {
        value.to_string()
    }
}

/// Full cleanup for a default value.
///
/// Object and list literals keep their inner quotes so a truncated
/// `{ "k" = "v"` closes as `{ "k" = "v" }`.
pub fn normalize_default(raw: &str) -> String {
    let value = strip_trailing_comment(raw.trim());
    let value = collapse_whitespace(&value);

    if is_collection_literal(&value) {
        close_truncated(&value)
    } else {
        strip_surrounding_quotes(&value).to_string()
    }
}

fn is_collection_literal(value: &str) -> bool {
    value.starts_with('{') || value.starts_with('[')
}
