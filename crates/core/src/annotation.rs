use std::sync::LazyLock;

use regex::Regex;

use crate::DatabaseEngine;

static ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^/\*+[\s*]*Database:\s*(MySQL|MariaDB|PostgresSQL)[\s*]+/")
        .expect("annotation pattern is valid")
});

/// Extracts the declared database engine from a leading script comment.
pub struct AnnotationExtractor;

impl AnnotationExtractor {
    /// Returns the declared engine, if any, and the script content with the
    /// annotation comment removed.
    ///
    /// The annotation is a comment of the literal shape
    /// `/* Database: <Engine> */` at the start of a line, where `<Engine>`
    /// is one of the closed [`DatabaseEngine`] spellings. When present,
    /// every occurrence of the exact matched comment text is removed before
    /// the remainder is trimmed of leading/trailing newlines. When absent,
    /// the content is returned unchanged except for that trimming.
    #[must_use]
    pub fn extract(script: &str) -> (Option<DatabaseEngine>, String) {
        let Some(captures) = ANNOTATION.captures(script) else {
            return (None, script.trim_matches('\n').to_string());
        };

        let engine = captures[1]
            .parse::<DatabaseEngine>()
            .expect("annotation alternation only admits known engines");
        let matched = &captures[0];
        let stripped = script.replace(matched, "");

        (Some(engine), stripped.trim_matches('\n').to_string())
    }
}
