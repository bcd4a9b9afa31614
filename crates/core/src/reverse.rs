use std::sync::LazyLock;

use regex::Regex;

/// Recognized forward-statement shapes, in match priority order.
///
/// The shapes overlap at the lexical level (an `ALTER TABLE DROP` statement
/// also starts with `ALTER TABLE`), so classification is first-match-wins
/// over this fixed order and exactly one kind applies per statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Comments, statements that are already drops, and `USE` statements.
    /// Never reversed; `USE` is diverted to database-name extraction by the
    /// assembler.
    Excluded,
    AddColumn,
    CreateTable,
    CreateDatabase,
    /// No shape matched; the statement passes through verbatim.
    Unrecognized,
}

const EXCLUDED_PREFIXES: [&str; 3] = ["# ", "ALTER TABLE DROP ", "USE "];

static ADD_COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)^ALTER TABLE\s+[`"']?([a-zA-Z0-9_]+)[`"']?\s+ADD\s+[`"']?([a-z_]+)[`"']?\s+[\s\S]*;?$"#,
    )
    .expect("add-column pattern is valid")
});

static CREATE_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^CREATE TABLE (IF NOT EXISTS )?[`"']?([a-z_]+)[`"']?[\s\S]*;?$"#)
        .expect("create-table pattern is valid")
});

static CREATE_DATABASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^CREATE DATABASE (IF NOT EXISTS )?[`"']?([a-z_]+)[`"']?;?$"#)
        .expect("create-database pattern is valid")
});

/// Classifies one forward statement against the ordered shape matchers.
#[must_use]
pub fn classify(statement: &str) -> StatementKind {
    if EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| statement.starts_with(prefix))
    {
        StatementKind::Excluded
    } else if ADD_COLUMN.is_match(statement) {
        StatementKind::AddColumn
    } else if CREATE_TABLE.is_match(statement) {
        StatementKind::CreateTable
    } else if CREATE_DATABASE.is_match(statement) {
        StatementKind::CreateDatabase
    } else {
        StatementKind::Unrecognized
    }
}

/// Produces the textual inverse of one forward statement.
///
/// `None` means no inverse: the statement is excluded, or a shape matched
/// lexically but was missing a required capture. Unrecognized statements
/// return themselves verbatim; that pass-through can replay non-idempotent
/// forward statements on rollback and is preserved deliberately.
#[must_use]
pub fn reverse_statement(statement: &str) -> Option<String> {
    match classify(statement) {
        StatementKind::Excluded => None,
        StatementKind::AddColumn => reverse_add_column(statement),
        StatementKind::CreateTable => reverse_create(statement, &CREATE_TABLE, "DROP TABLE"),
        StatementKind::CreateDatabase => {
            reverse_create(statement, &CREATE_DATABASE, "DROP DATABASE")
        }
        StatementKind::Unrecognized => Some(statement.to_string()),
    }
}

fn reverse_add_column(statement: &str) -> Option<String> {
    let captures = ADD_COLUMN.captures(statement)?;
    let table = captures.get(1)?.as_str();
    let column = captures.get(2)?.as_str();
    Some(format!("ALTER TABLE `{table}` DROP {column}"))
}

fn reverse_create(statement: &str, pattern: &Regex, drop_keyword: &str) -> Option<String> {
    let captures = pattern.captures(statement)?;
    let guard = if captures.get(1).is_some() {
        "IF EXISTS "
    } else {
        ""
    };
    let name = captures.get(2)?.as_str();
    Some(format!("{drop_keyword} {guard}{name}"))
}
