/// Splits a migration script into individual statements.
///
/// Fragments are separated on the `;` terminator, trimmed of leading and
/// trailing newline characters, and dropped when empty after trimming. The
/// relative order of the surviving statements is preserved.
///
/// A terminator inside a string literal or comment still splits; the
/// segmenter has no nesting awareness (inherited behavior).
#[must_use]
pub fn split_statements(content: &str) -> Vec<String> {
    content
        .split(';')
        .map(|fragment| fragment.trim_matches('\n'))
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}
